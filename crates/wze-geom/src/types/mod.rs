// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the engine (vectors, rectangles).
//!
//! Determinism notes:
//! - Overlap semantics are inclusive on edges so that touching actors count as
//!   in contact; collision resolution adds an explicit epsilon to break contact.
//! - No fused multiply-add; identical inputs give identical outputs.

#[doc = "Axis-aligned rectangles (world space, Y-up)."]
pub mod rect;
#[doc = "Planar `f64` vectors."]
pub mod vec2;
