// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persistence for the solver's [`CollisionConfig`].
//!
//! Backends implement [`ConfigStore`], a byte-level port keyed by document
//! name. [`CollisionSettings`] adds JSON and validation on top, so callers
//! only ever receive settings the solver accepts.

use std::io;
use thiserror::Error;
use wze_collision::{CollisionConfig, CollisionError};

/// Byte-level storage for named config documents.
pub trait ConfigStore {
    /// Document stored under `key`, or `Ok(None)` if nothing was written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError>;

    /// Replaces the document stored under `key`.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), ConfigError>;

    /// Where `key` lives, for messages (a path, a map key).
    fn locate(&self, key: &str) -> String;
}

/// Failures while reading or writing solver settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing store cannot be reached.
    #[error("config store unavailable: {0}")]
    Unavailable(String),
    /// Reading or writing the backing store failed.
    #[error("config i/o failed: {0}")]
    Io(#[from] io::Error),
    /// The stored document is not settings JSON.
    #[error("malformed settings document: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The document parsed but holds values the solver refuses.
    #[error("rejected settings: {0}")]
    Rejected(#[from] CollisionError),
    /// A document already exists and overwriting was not requested.
    #[error("{0} already exists")]
    AlreadyExists(String),
}

/// Validated load and save of [`CollisionConfig`] under
/// [`CollisionConfig::CONFIG_KEY`].
///
/// Every value crossing this boundary goes through
/// [`CollisionConfig::validate`], in both directions.
#[derive(Debug, Clone)]
pub struct CollisionSettings<S> {
    store: S,
}

impl<S: ConfigStore> CollisionSettings<S> {
    /// Settings backed by `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Location of the settings document.
    pub fn location(&self) -> String {
        self.store.locate(CollisionConfig::CONFIG_KEY)
    }

    /// Stored settings, or `None` when the document is absent or blank.
    ///
    /// Missing fields take their defaults; present ones must validate.
    pub fn stored(&self) -> Result<Option<CollisionConfig>, ConfigError> {
        let Some(bytes) = self.store.read(CollisionConfig::CONFIG_KEY)? else {
            return Ok(None);
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let config: CollisionConfig = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Stored settings, falling back to [`CollisionConfig::default`].
    pub fn load(&self) -> Result<CollisionConfig, ConfigError> {
        Ok(self.stored()?.unwrap_or_default())
    }

    /// Writes `config` as pretty JSON; invalid values are never persisted.
    pub fn save(&self, config: &CollisionConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let bytes = serde_json::to_vec_pretty(config)?;
        self.store.write(CollisionConfig::CONFIG_KEY, &bytes)
    }

    /// Writes the default settings and returns them.
    ///
    /// Without `overwrite`, an existing document (even an invalid one) is
    /// left alone and [`ConfigError::AlreadyExists`] is returned.
    pub fn init(&self, overwrite: bool) -> Result<CollisionConfig, ConfigError> {
        if !overwrite && self.store.read(CollisionConfig::CONFIG_KEY)?.is_some() {
            return Err(ConfigError::AlreadyExists(self.location()));
        }
        let config = CollisionConfig::default();
        self.save(&config)?;
        Ok(config)
    }
}
