// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pairwise separation with a force/resistance split.

use crate::actor::Actor;
use crate::direction::{direction, Direction, Horizontal, Vertical};
use wze_geom::Vec2;

/// Positional corrections that separate two actors.
///
/// `first` is always applied to the pushing actor and includes the epsilon
/// margin; `second` is the share of the penetration the pushed actor yields
/// (zero when the push did not exceed its resistance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Contact direction that produced this correction.
    pub direction: Direction,
    /// Displacement applied to the first actor.
    pub first: Vec2,
    /// Displacement applied to the second actor.
    pub second: Vec2,
}

impl Separation {
    /// Adds both displacements to their actors' current positions.
    pub fn apply(&self, first: &mut Actor, second: &mut Actor) {
        first.translate(self.first);
        if !self.second.is_zero() {
            second.translate(self.second);
        }
    }
}

/// Computes the correction separating `actor1` from `actor2`.
///
/// Returns `None` when [`direction`] reports no new contact.
///
/// - `incoming_force <= actor2.resistance()`: `actor1` backs out by the full
///   penetration plus `epsilon`; `actor2` does not move.
/// - Otherwise, with `ratio = f / (f + r)`, `actor1` backs out by
///   `(1 - ratio) * depth + epsilon` and `actor2` is pushed `ratio * depth`
///   the other way.
///
/// Corner directions apply the rule on both axes independently.
#[must_use]
pub fn resolve_pair(
    actor1: &Actor,
    incoming_force: u64,
    actor2: &Actor,
    epsilon: f64,
) -> Option<Separation> {
    let direction = direction(actor1, actor2);
    if direction.is_none() {
        return None;
    }

    let a = actor1.bounds();
    let b = actor2.bounds();
    let ratio = push_ratio(incoming_force, actor2.resistance());
    let keep = ratio.map_or(1.0, |ratio| 1.0 - ratio);

    let mut first = Vec2::ZERO;
    let mut second = Vec2::ZERO;

    // Each arm: (depth, sign of the first actor's correction on that axis).
    let vertical = direction.vertical().map(|side| match side {
        Vertical::Top => (a.top() - b.bottom(), -1.0),
        Vertical::Bot => (b.top() - a.bottom(), 1.0),
    });
    if let Some((depth, sign)) = vertical {
        first += Vec2::new(0.0, sign * (depth * keep + epsilon));
        if let Some(ratio) = ratio {
            second += Vec2::new(0.0, -sign * depth * ratio);
        }
    }

    let horizontal = direction.horizontal().map(|side| match side {
        Horizontal::Left => (b.right() - a.left(), 1.0),
        Horizontal::Right => (a.right() - b.left(), -1.0),
    });
    if let Some((depth, sign)) = horizontal {
        first += Vec2::new(sign * (depth * keep + epsilon), 0.0);
        if let Some(ratio) = ratio {
            second += Vec2::new(-sign * depth * ratio, 0.0);
        }
    }

    Some(Separation {
        direction,
        first,
        second,
    })
}

/// Share of the penetration the pushed actor yields, or `None` for a wall.
#[allow(clippy::cast_precision_loss)] // force magnitudes are far below 2^53
fn push_ratio(force: u64, resistance: u64) -> Option<f64> {
    if force <= resistance {
        return None;
    }
    let force = force as f64;
    Some(force / (force + resistance as f64))
}
