// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Contact direction classification against a 10×10 box at the origin.

use wze_collision::{direction, Actor, ActorArena, CollisionError, CollisionSystem, Direction};
use wze_dry_tests::ActorBuilder;

fn target() -> Actor {
    ActorBuilder::at(0.0, 0.0).build()
}

fn mover(prev: (f64, f64), cur: (f64, f64)) -> Actor {
    ActorBuilder::at(cur.0, cur.1).was_at(prev.0, prev.1).build()
}

/// `(expected, previous center, current center)` for a mover against `target()`.
const CASES: [(Direction, (f64, f64), (f64, f64)); 8] = [
    (Direction::Bot, (0.0, 15.0), (0.0, 8.0)),
    (Direction::Top, (0.0, -15.0), (0.0, -8.0)),
    (Direction::Left, (15.0, 0.0), (8.0, 0.0)),
    (Direction::Right, (-15.0, 0.0), (-8.0, 0.0)),
    (Direction::TopLeft, (12.0, -12.0), (8.0, -8.0)),
    (Direction::TopRight, (-12.0, -12.0), (-8.0, -8.0)),
    (Direction::BotLeft, (12.0, 12.0), (8.0, 8.0)),
    (Direction::BotRight, (-12.0, 12.0), (-8.0, 8.0)),
];

#[test]
fn all_eight_directions_classify() {
    for (expected, prev, cur) in CASES {
        let got = direction(&mover(prev, cur), &target());
        assert_eq!(got, expected, "prev={prev:?} cur={cur:?}");
    }
}

#[test]
fn falling_onto_box_touching_its_top_is_bot() {
    // Lands exactly on the top edge: inclusive overlap still counts.
    let faller = mover((0.0, 15.0), (0.0, 10.0));
    assert_eq!(direction(&faller, &target()), Direction::Bot);
}

#[test]
fn mirrored_approach_yields_opposite_direction() {
    for (expected, prev, cur) in CASES {
        let mirrored = mover((-prev.0, -prev.1), (-cur.0, -cur.1));
        assert_eq!(direction(&mirrored, &target()), expected.opposite());
    }
}

#[test]
fn diagonal_tie_break_prefers_shallower_axis() {
    // Same approach as TopLeft, but entering 3 deep horizontally and 2 vertically.
    let deeper_x = mover((12.0, -12.0), (7.0, -8.0));
    assert_eq!(direction(&deeper_x, &target()), Direction::Top);

    let deeper_y = mover((12.0, -12.0), (8.0, -7.0));
    assert_eq!(direction(&deeper_y, &target()), Direction::Left);

    let deeper_x = mover((-12.0, 12.0), (-7.0, 8.0));
    assert_eq!(direction(&deeper_x, &target()), Direction::Bot);

    let deeper_y = mover((-12.0, 12.0), (-8.0, 7.0));
    assert_eq!(direction(&deeper_y, &target()), Direction::Right);
}

#[test]
fn corner_approach_with_lined_up_edge_is_cardinal() {
    // Previous box already spans past the target's right edge horizontally.
    let rising = mover((9.0, -12.0), (6.0, -8.0));
    assert_eq!(direction(&rising, &target()), Direction::Top);

    // Previous box already spans past the target's bottom edge vertically.
    let sliding = mover((12.0, -9.0), (8.0, -6.0));
    assert_eq!(direction(&sliding, &target()), Direction::Left);
}

#[test]
fn stale_and_absent_contacts_are_none() {
    let resting = mover((0.0, 9.0), (0.0, 8.0));
    assert_eq!(direction(&resting, &target()), Direction::None);

    let missed = mover((0.0, 30.0), (0.0, 20.0));
    assert_eq!(direction(&missed, &target()), Direction::None);

    let stationary = target();
    assert_eq!(direction(&stationary, &target()), Direction::None);
}

#[test]
fn direction_depends_only_on_first_actors_motion() {
    // The second actor's own history is ignored.
    let faller = mover((0.0, 15.0), (0.0, 8.0));
    let teleported_target = ActorBuilder::at(0.0, 0.0).was_at(100.0, 100.0).build();
    assert_eq!(direction(&faller, &teleported_target), Direction::Bot);
}

#[test]
fn system_direction_validates_handles() {
    let mut arena = ActorArena::new();
    let a = arena.insert(mover((0.0, 15.0), (0.0, 8.0)));
    let b = arena.insert(target());
    let system = CollisionSystem::new();

    assert_eq!(system.direction(&arena, a, b), Ok(Direction::Bot));
    assert_eq!(system.direction(&arena, b, a), Ok(Direction::None));
    assert_eq!(
        system.direction(&arena, a, a),
        Err(CollisionError::SelfPair(a))
    );

    arena.remove(b);
    assert_eq!(
        system.direction(&arena, a, b),
        Err(CollisionError::UnknownActor(b))
    );
}
