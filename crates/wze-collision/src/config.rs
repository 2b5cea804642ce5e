// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Solver configuration.

use crate::error::CollisionError;
use serde::{Deserialize, Serialize};

/// Default separation margin added to every correction.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Tunables for the collision solver.
///
/// Serialized as JSON by config stores; missing fields fall back to their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Extra distance added to the pushing actor's correction so separated
    /// boxes fail the inclusive overlap test on the next query.
    pub epsilon: f64,
}

impl CollisionConfig {
    /// Key under which stored settings documents are filed.
    pub const CONFIG_KEY: &'static str = "collision";

    /// Checks that every field is usable by the solver.
    pub fn validate(&self) -> Result<(), CollisionError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(CollisionError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}
