// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Actor construction helpers for tests.

use wze_collision::{Actor, Vec2};

/// Default square hitbox edge used by fixtures: 10 units.
pub const DEFAULT_SIZE: f64 = 10.0;

/// Builder for actors with an explicit previous-tick position.
///
/// # Example
///
/// ```
/// use wze_dry_tests::ActorBuilder;
///
/// // Falling onto something below: was at y = 15, now at y = 8.
/// let actor = ActorBuilder::at(0.0, 8.0).was_at(0.0, 15.0).force(5).build();
/// assert_eq!(actor.prev_position().to_array(), [0.0, 15.0]);
/// assert_eq!(actor.position().to_array(), [0.0, 8.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ActorBuilder {
    position: Vec2,
    previous: Option<Vec2>,
    size: Vec2,
    force: u64,
    resistance: u64,
}

impl ActorBuilder {
    /// Start an actor centered at `(x, y)` with the default square hitbox.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            previous: None,
            size: Vec2::new(DEFAULT_SIZE, DEFAULT_SIZE),
            force: 0,
            resistance: 0,
        }
    }

    /// Previous-tick center; defaults to the current center (no motion).
    pub fn was_at(mut self, x: f64, y: f64) -> Self {
        self.previous = Some(Vec2::new(x, y));
        self
    }

    /// Previous-tick center expressed as the motion that led to the current one.
    pub fn moved_by(mut self, dx: f64, dy: f64) -> Self {
        self.previous = Some(self.position - Vec2::new(dx, dy));
        self
    }

    /// Hitbox size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    /// Push strength.
    pub fn force(mut self, force: u64) -> Self {
        self.force = force;
        self
    }

    /// Push resistance.
    pub fn resistance(mut self, resistance: u64) -> Self {
        self.resistance = resistance;
        self
    }

    /// Build the actor: placed at the previous center, then moved.
    pub fn build(self) -> Actor {
        let mut actor = Actor::new(
            self.previous.unwrap_or(self.position),
            self.size.x(),
            self.size.y(),
        )
        .with_force(self.force)
        .with_resistance(self.resistance);
        actor.set_position(self.position);
        actor
    }
}
