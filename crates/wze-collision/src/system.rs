// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision system: layer rosters plus the per-tick resolution entry points.

use crate::actor::{ActorArena, ActorId};
use crate::config::CollisionConfig;
use crate::direction::{direction, Direction};
use crate::error::CollisionError;
use crate::layer::{LayerId, LayerTable};
use crate::pair::resolve_pair;
use crate::resolve::{LayerPass, LayerReport};
use tracing::{debug, instrument, warn};
use wze_geom::Tick;

/// Per-layer collision solver.
///
/// Holds only actor handles; actor state lives in the engine's
/// [`ActorArena`], which is borrowed for each call. Layers are independent:
/// actors in different layers never see each other.
#[derive(Debug, Clone, Default)]
pub struct CollisionSystem {
    config: CollisionConfig,
    layers: LayerTable,
    tick: Tick,
}

impl CollisionSystem {
    /// Creates a system with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a system with a validated configuration.
    pub fn with_config(config: CollisionConfig) -> Result<Self, CollisionError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Replaces the configuration after validating it.
    pub fn set_config(&mut self, config: CollisionConfig) -> Result<(), CollisionError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Tick the next [`CollisionSystem::step`] will run in.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Moves `id` into `layer`, or out of every layer for `None`.
    ///
    /// The actor is appended to the end of the new roster. Returns the layer
    /// it previously belonged to.
    pub fn set_layer(
        &mut self,
        arena: &ActorArena,
        id: ActorId,
        layer: Option<LayerId>,
    ) -> Result<Option<LayerId>, CollisionError> {
        if !arena.contains(id) {
            return Err(CollisionError::UnknownActor(id));
        }
        Ok(self.layers.assign(id, layer))
    }

    /// Drops every trace of `id` (call when its owner despawns it).
    pub fn forget(&mut self, id: ActorId) -> Option<LayerId> {
        self.layers.remove(id)
    }

    /// Layer `id` currently belongs to.
    #[must_use]
    pub fn layer_of(&self, id: ActorId) -> Option<LayerId> {
        self.layers.layer_of(id)
    }

    /// Roster of `layer` in resolution order.
    #[must_use]
    pub fn members(&self, layer: LayerId) -> &[ActorId] {
        self.layers.members(layer)
    }

    /// Removes every member of `layer`, returning them in roster order.
    pub fn clear_layer(&mut self, layer: LayerId) -> Vec<ActorId> {
        self.layers.clear(layer)
    }

    /// Non-empty layers in ascending id order.
    pub fn layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.layers()
    }

    /// Contact direction of `a` against `b` as of the arena's current state.
    pub fn direction(
        &self,
        arena: &ActorArena,
        a: ActorId,
        b: ActorId,
    ) -> Result<Direction, CollisionError> {
        if a == b {
            return Err(CollisionError::SelfPair(a));
        }
        let first = arena.get(a).ok_or(CollisionError::UnknownActor(a))?;
        let second = arena.get(b).ok_or(CollisionError::UnknownActor(b))?;
        Ok(direction(first, second))
    }

    /// Separates `a` from `b` pushing with `force`.
    ///
    /// Returns whether a correction was applied. Layer membership is not
    /// consulted.
    pub fn resolve(
        &self,
        arena: &mut ActorArena,
        a: ActorId,
        force: u64,
        b: ActorId,
    ) -> Result<bool, CollisionError> {
        if a == b {
            return Err(CollisionError::SelfPair(a));
        }
        let missing = if arena.contains(a) { b } else { a };
        let (first, second) = arena
            .pair_mut(a, b)
            .ok_or(CollisionError::UnknownActor(missing))?;
        Ok(match resolve_pair(first, force, second, self.config.epsilon) {
            Some(separation) => {
                separation.apply(first, second);
                true
            }
            None => false,
        })
    }

    /// Runs one resolution pass over `layer`.
    ///
    /// Members whose handles no longer resolve in `arena` are skipped for the
    /// pass. Every visited member ends the pass with its previous-tick
    /// snapshot equal to its final state.
    #[instrument(skip(self, arena), fields(tick = %self.tick))]
    pub fn resolve_layer(&self, arena: &mut ActorArena, layer: LayerId) -> LayerReport {
        let roster = self.layers.members(layer);
        let mut members = Vec::with_capacity(roster.len());
        for id in roster {
            if arena.contains(*id) {
                members.push(*id);
            } else {
                warn!(actor = %id, "roster references a despawned actor; skipping");
            }
        }

        let report = LayerReport::empty(layer, self.tick);
        let report = LayerPass::new(arena, members, self.config.epsilon, report).run();
        debug!(
            members = report.members,
            corrections = report.corrections,
            branch_pushes = report.branch_pushes,
            "layer resolved"
        );
        report
    }

    /// Resolves every non-empty layer in ascending id order, then advances
    /// the tick.
    pub fn step(&mut self, arena: &mut ActorArena) -> Vec<LayerReport> {
        let layers: Vec<LayerId> = self.layers.layers().collect();
        let mut reports = Vec::with_capacity(layers.len());
        for layer in layers {
            reports.push(self.resolve_layer(arena, layer));
        }
        self.tick = self.tick.next();
        reports
    }
}
