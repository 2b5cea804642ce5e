// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! wze-collision: discrete, per-layer positional collision solver.
//!
//! Actors are axis-aligned rectangles with a one-tick position history and a
//! force/resistance pair. Once per tick the engine applies desired motion to
//! actor positions and then asks the [`CollisionSystem`] to resolve each
//! layer:
//!
//! 1. [`direction`] classifies each new contact by the side it was entered
//!    from, using the previous-tick box as the swept reference.
//! 2. [`resolve_pair`] separates a contact, splitting the correction between
//!    the two actors by incoming force against resistance.
//! 3. The layer pass pushes surplus force through chains of touching actors
//!    and finally snapshots every member's state for the next tick.
//!
//! The solver is synchronous and deterministic: identical arenas, rosters
//! and configs produce identical positions.
#![forbid(unsafe_code)]

mod actor;
mod config;
mod direction;
mod error;
mod layer;
mod pair;
mod resolve;
mod system;

pub use actor::{Actor, ActorArena, ActorId};
pub use config::{CollisionConfig, DEFAULT_EPSILON};
pub use direction::{classify, direction, Direction};
pub use error::CollisionError;
pub use layer::LayerId;
pub use pair::{resolve_pair, Separation};
pub use resolve::LayerReport;
pub use system::CollisionSystem;
/// Geometry re-exports so callers need not depend on `wze-geom` directly.
pub use wze_geom::{Rect, Tick, Vec2};
