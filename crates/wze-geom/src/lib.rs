// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for the Wizard engine.

This crate provides:
- Planar vectors (`Vec2`).
- Axis-aligned rectangles (`Rect`) and the corner-containment overlap test.
- Discrete simulation ticks (`Tick`).

Design notes:
- World space is Y-up: a rectangle's `top` has the larger Y.
- Float64 throughout so positional corrections accumulate like the engine's
  double-precision actor state.
- Overlap is boundary inclusive: rectangles that share an edge overlap.
"]

/// Time-aware utilities for tick-based motion.
pub mod temporal;
/// Foundational geometric types.
pub mod types;

pub use temporal::tick::Tick;
pub use types::rect::{overlaps, Rect};
pub use types::vec2::Vec2;
