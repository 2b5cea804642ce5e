// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors surfaced by collision registration and configuration.
//!
//! Resolution itself never fails; these only cover handle bookkeeping and
//! config validation.

use crate::actor::ActorId;
use thiserror::Error;

/// Error type for collision-system bookkeeping.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollisionError {
    /// The handle does not refer to a live actor.
    #[error("unknown or despawned actor {0}")]
    UnknownActor(ActorId),
    /// Both sides of a pair query name the same actor.
    #[error("actor {0} cannot be paired with itself")]
    SelfPair(ActorId),
    /// Separation epsilon is NaN, infinite or negative.
    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
}
