// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store fake for testing without filesystem I/O.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use wze_app_core::config::{ConfigError, ConfigStore};

/// [`ConfigStore`] backed by a shared in-memory map.
///
/// Clones share documents, counters and failure switches, so a test can hand
/// one clone to `CollisionSettings` and inspect the other.
///
/// # Example
///
/// ```
/// use wze_app_core::config::CollisionSettings;
/// use wze_collision::CollisionConfig;
/// use wze_dry_tests::InMemoryConfigStore;
///
/// let store = InMemoryConfigStore::new();
/// let settings = CollisionSettings::new(store.clone());
///
/// settings.save(&CollisionConfig::default()).unwrap();
/// assert_eq!(store.write_count(), 1);
/// assert!(store.contains_key(CollisionConfig::CONFIG_KEY));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    shared: Arc<Mutex<Shared>>,
}

#[derive(Debug, Default)]
struct Shared {
    docs: BTreeMap<String, Vec<u8>>,
    reads: usize,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding one document.
    pub fn with_entry(key: &str, doc: &[u8]) -> Self {
        let store = Self::new();
        store.lock().docs.insert(key.to_owned(), doc.to_vec());
        store
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Makes every subsequent read fail with [`ConfigError::Unavailable`].
    pub fn set_fail_on_read(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Makes every subsequent write fail with [`ConfigError::Unavailable`].
    pub fn set_fail_on_write(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Read attempts so far, failed ones included.
    pub fn read_count(&self) -> usize {
        self.lock().reads
    }

    /// Write attempts so far, failed ones included.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Whether a document exists under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().docs.contains_key(key)
    }

    /// Bytes stored under `key`, without counting a read.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().docs.get(key).cloned()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError> {
        let mut shared = self.lock();
        shared.reads += 1;
        if shared.fail_reads {
            return Err(ConfigError::Unavailable(format!("read of {key} refused")));
        }
        Ok(shared.docs.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), ConfigError> {
        let mut shared = self.lock();
        shared.writes += 1;
        if shared.fail_writes {
            return Err(ConfigError::Unavailable(format!("write of {key} refused")));
        }
        shared.docs.insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }

    fn locate(&self, key: &str) -> String {
        format!("memory:{key}")
    }
}
