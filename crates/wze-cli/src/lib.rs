// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Library half of `wze-cli`: scene loading, replay and rendering.
#![forbid(unsafe_code)]

pub mod render;
pub mod scene;

pub use scene::{ActorSpec, ActorState, Outcome, Scene, SceneError, Simulation, Totals};
