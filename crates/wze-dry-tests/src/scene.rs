// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Arena + collision-system fixture for layer-level tests and benches.

use crate::actors::{ActorBuilder, DEFAULT_SIZE};
use wze_collision::{
    Actor, ActorArena, ActorId, CollisionConfig, CollisionError, CollisionSystem, LayerId,
    LayerReport,
};

/// Layer used by fixtures when none is specified.
pub const DEFAULT_LAYER: LayerId = LayerId::new(0);

/// An [`ActorArena`] and a [`CollisionSystem`] wired together.
///
/// # Example
///
/// ```
/// use wze_dry_tests::{ActorBuilder, LayerFixture, DEFAULT_LAYER};
///
/// let mut fx = LayerFixture::new();
/// let faller = fx.spawn(ActorBuilder::at(0.0, 8.0).was_at(0.0, 15.0));
/// let floor = fx.spawn(ActorBuilder::at(0.0, 0.0).resistance(100));
/// fx.resolve(DEFAULT_LAYER);
/// assert!(fx.pos(faller)[1] > 10.0);
/// assert_eq!(fx.pos(floor), [0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayerFixture {
    /// Actor storage.
    pub arena: ActorArena,
    /// Solver under test.
    pub system: CollisionSystem,
}

impl LayerFixture {
    /// Empty fixture with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty fixture with a custom config.
    pub fn with_config(config: CollisionConfig) -> Result<Self, CollisionError> {
        Ok(Self {
            arena: ActorArena::new(),
            system: CollisionSystem::with_config(config)?,
        })
    }

    /// Builds an actor into [`DEFAULT_LAYER`].
    pub fn spawn(&mut self, builder: ActorBuilder) -> ActorId {
        self.spawn_in(DEFAULT_LAYER, builder)
    }

    /// Builds an actor into `layer`.
    #[allow(clippy::expect_used)]
    pub fn spawn_in(&mut self, layer: LayerId, builder: ActorBuilder) -> ActorId {
        let id = self.arena.insert(builder.build());
        self.system
            .set_layer(&self.arena, id, Some(layer))
            .expect("freshly inserted actor must be registrable");
        id
    }

    /// Removes an actor from the arena and its layer.
    pub fn despawn(&mut self, id: ActorId) -> Option<Actor> {
        self.system.forget(id);
        self.arena.remove(id)
    }

    /// Actor behind `id`; panics if it no longer exists.
    #[allow(clippy::expect_used)]
    pub fn actor(&self, id: ActorId) -> &Actor {
        self.arena.get(id).expect("fixture actor must be live")
    }

    /// Mutable actor behind `id`; panics if it no longer exists.
    #[allow(clippy::expect_used)]
    pub fn actor_mut(&mut self, id: ActorId) -> &mut Actor {
        self.arena.get_mut(id).expect("fixture actor must be live")
    }

    /// Current center of `id` as `[x, y]`.
    pub fn pos(&self, id: ActorId) -> [f64; 2] {
        self.actor(id).position().to_array()
    }

    /// Runs one pass over `layer`.
    pub fn resolve(&mut self, layer: LayerId) -> LayerReport {
        self.system.resolve_layer(&mut self.arena, layer)
    }

    /// Runs one full tick over every layer.
    pub fn step(&mut self) -> Vec<LayerReport> {
        self.system.step(&mut self.arena)
    }
}

/// Spawns `count` boxes in a horizontal row on `layer`, left to right.
///
/// Neighbours sit `gap` apart. The first box moved `push` units right since
/// the previous tick and carries `force`; every box resists with
/// `resistance`. Returns the ids in row order.
pub fn box_row(
    fx: &mut LayerFixture,
    layer: LayerId,
    count: usize,
    gap: f64,
    push: f64,
    force: u64,
    resistance: u64,
) -> Vec<ActorId> {
    let pitch = DEFAULT_SIZE + gap;
    let mut x = 0.0;
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let builder = if i == 0 {
            ActorBuilder::at(push, 0.0).was_at(0.0, 0.0).force(force)
        } else {
            ActorBuilder::at(x, 0.0)
        };
        ids.push(fx.spawn_in(layer, builder.resistance(resistance)));
        x += pitch;
    }
    ids
}
