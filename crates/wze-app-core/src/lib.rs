// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Application services shared by Wizard engine tools.
//!
//! Storage adapters implement the ports defined here and stay free of
//! solver knowledge; validation lives in the services.

pub mod config;
