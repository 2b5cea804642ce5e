// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON scenes and a fixed-velocity replay driver.
//!
//! A scene lists named actors with a starting position, hitbox, constant
//! velocity, force, resistance and layer. [`Simulation`] owns the arena and
//! the [`CollisionSystem`]; every tick it adds each actor's velocity to its
//! position and then resolves all layers.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use wze_collision::{
    Actor, ActorArena, ActorId, CollisionConfig, CollisionError, CollisionSystem, LayerId,
    LayerReport, Tick, Vec2,
};

/// Hitbox used when an actor entry omits `size`.
pub const DEFAULT_ACTOR_SIZE: [f64; 2] = [10.0, 10.0];

/// Errors raised while loading or instantiating a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The scene is not valid JSON for this format.
    #[error("invalid scene json: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two actors share a name.
    #[error("duplicate actor name {0:?}")]
    DuplicateActor(String),
    /// An actor entry has unusable values.
    #[error("actor {name:?}: {reason}")]
    InvalidActor {
        /// Offending actor.
        name: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The solver rejected the effective configuration.
    #[error(transparent)]
    Collision(#[from] CollisionError),
}

/// One actor entry in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorSpec {
    /// Unique label used in output.
    pub name: String,
    /// Starting center.
    pub position: [f64; 2],
    /// Hitbox `[width, height]`.
    #[serde(default = "default_size")]
    pub size: [f64; 2],
    /// Displacement added every tick before resolution.
    #[serde(default)]
    pub velocity: [f64; 2],
    /// Push strength.
    #[serde(default)]
    pub force: u64,
    /// Push resistance.
    #[serde(default)]
    pub resistance: u64,
    /// Collision layer.
    #[serde(default)]
    pub layer: u8,
}

const fn default_size() -> [f64; 2] {
    DEFAULT_ACTOR_SIZE
}

/// A replayable scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Ticks to run when the caller does not say.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<u64>,
    /// Epsilon override for this scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epsilon: Option<f64>,
    /// Actors in roster order.
    pub actors: Vec<ActorSpec>,
}

impl Scene {
    /// Parses a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a scene file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks names and numeric fields.
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen = std::collections::BTreeSet::new();
        for spec in &self.actors {
            let invalid = |reason| SceneError::InvalidActor {
                name: spec.name.clone(),
                reason,
            };
            if spec.name.is_empty() {
                return Err(invalid("name must not be empty"));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(SceneError::DuplicateActor(spec.name.clone()));
            }
            if spec.size.iter().any(|s| !s.is_finite() || *s <= 0.0) {
                return Err(invalid("size must be finite and positive"));
            }
            if spec.position.iter().chain(&spec.velocity).any(|v| !v.is_finite()) {
                return Err(invalid("position and velocity must be finite"));
            }
        }
        Ok(())
    }
}

/// Final state of one actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorState {
    /// Scene label.
    pub name: String,
    /// Collision layer.
    pub layer: u8,
    /// Center after the last tick.
    pub position: [f64; 2],
}

/// Counters summed over every layer pass of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Layer passes executed.
    pub passes: usize,
    /// Corrections applied.
    pub corrections: usize,
    /// Branches opened by force propagation.
    pub branch_pushes: usize,
    /// Deepest push path seen.
    pub max_depth: usize,
}

impl Totals {
    fn absorb(&mut self, report: &LayerReport) {
        self.passes += 1;
        self.corrections += report.corrections;
        self.branch_pushes += report.branch_pushes;
        self.max_depth = self.max_depth.max(report.max_depth);
    }
}

/// Result of [`Simulation::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Ticks executed.
    pub ticks: u64,
    /// Separation epsilon in effect.
    pub epsilon: f64,
    /// Summed pass counters.
    pub totals: Totals,
    /// Per-pass reports in execution order; empty unless the run recorded them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<LayerReport>,
    /// Actors in scene order.
    pub actors: Vec<ActorState>,
}

struct Entry {
    name: String,
    id: ActorId,
    layer: u8,
    velocity: Vec2,
}

/// Scene replay state.
pub struct Simulation {
    arena: ActorArena,
    system: CollisionSystem,
    entries: Vec<Entry>,
}

impl Simulation {
    /// Instantiates `scene` under `config`.
    ///
    /// Actors join their layers in scene order, which fixes the resolution
    /// order within each layer.
    pub fn new(scene: &Scene, config: CollisionConfig) -> Result<Self, SceneError> {
        scene.validate()?;
        let mut system = CollisionSystem::with_config(config)?;
        let mut arena = ActorArena::new();
        let mut entries = Vec::with_capacity(scene.actors.len());

        for spec in &scene.actors {
            let actor = Actor::new(Vec2::from(spec.position), spec.size[0], spec.size[1])
                .with_force(spec.force)
                .with_resistance(spec.resistance);
            let id = arena.insert(actor);
            system.set_layer(&arena, id, Some(LayerId::new(spec.layer)))?;
            entries.push(Entry {
                name: spec.name.clone(),
                id,
                layer: spec.layer,
                velocity: Vec2::from(spec.velocity),
            });
        }

        Ok(Self {
            arena,
            system,
            entries,
        })
    }

    /// Tick the next call to [`Simulation::tick`] runs in.
    pub fn current_tick(&self) -> Tick {
        self.system.tick()
    }

    /// Moves every actor by its velocity, then resolves every layer.
    pub fn tick(&mut self) -> Vec<LayerReport> {
        for entry in &self.entries {
            if let Some(actor) = self.arena.get_mut(entry.id) {
                actor.translate(entry.velocity);
            }
        }
        self.system.step(&mut self.arena)
    }

    /// Runs `ticks` ticks, keeping only the summed [`Totals`].
    pub fn run(&mut self, ticks: u64) -> Outcome {
        self.replay(ticks, false)
    }

    /// Like [`Simulation::run`], but also keeps every [`LayerReport`].
    ///
    /// One report per non-empty layer per tick is retained, so memory grows
    /// with `ticks`.
    pub fn run_recorded(&mut self, ticks: u64) -> Outcome {
        self.replay(ticks, true)
    }

    fn replay(&mut self, ticks: u64, record: bool) -> Outcome {
        let mut totals = Totals::default();
        let mut reports = Vec::new();
        for _ in 0..ticks {
            let tick = self.current_tick();
            for report in self.tick() {
                totals.absorb(&report);
                if record {
                    reports.push(report);
                }
            }
            debug!(%tick, corrections = totals.corrections, "scene tick");
        }
        Outcome {
            ticks,
            epsilon: self.system.config().epsilon,
            totals,
            reports,
            actors: self.states(),
        }
    }

    /// Current actor states in scene order.
    pub fn states(&self) -> Vec<ActorState> {
        self.entries
            .iter()
            .filter_map(|entry| {
                self.arena.get(entry.id).map(|actor| ActorState {
                    name: entry.name.clone(),
                    layer: entry.layer,
                    position: actor.position().to_array(),
                })
            })
            .collect()
    }
}
