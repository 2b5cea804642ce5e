// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Wizard engine crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`actors`] - Actor builder with previous-tick (swept) placement
//! - [`config`] - In-memory settings store fake for testing without filesystem
//! - [`scene`] - Arena + collision system fixture and canned layouts

pub mod actors;
pub mod config;
pub mod scene;

// Re-export commonly used items at crate root for convenience
pub use actors::{ActorBuilder, DEFAULT_SIZE};
pub use config::InMemoryConfigStore;
pub use scene::{box_row, LayerFixture, DEFAULT_LAYER};
