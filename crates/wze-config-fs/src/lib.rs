// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Directory-backed [`ConfigStore`]: one `<key>.json` file per document.
//!
//! Documents are written to a temporary file in the target directory and
//! then renamed over `<key>.json`, so a reader sees either the old document
//! or the new one. The directory is created on first write.

use directories::ProjectDirs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use wze_app_core::config::{ConfigError, ConfigStore};

/// Settings files under a single directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    dir: PathBuf,
}

impl FsConfigStore {
    /// Store in the platform config directory (e.g. `~/.config/wizard-engine`).
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("dev", "flyingrobots", "wizard-engine").ok_or_else(|| {
            ConfigError::Unavailable("no home directory to derive a config dir from".into())
        })?;
        Ok(Self::at(dirs.config_dir()))
    }

    /// Store in `dir`.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the documents.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.dir)?;
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(bytes)?;
        staged.as_file().sync_all()?;
        staged
            .persist(self.path_for(key))
            .map_err(|err| ConfigError::Io(err.error))?;
        Ok(())
    }

    fn locate(&self, key: &str) -> String {
        self.path_for(key).display().to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_reads_as_none_without_creating_dir() {
        let root = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(root.path().join("nested"));
        assert_eq!(store.read("collision").unwrap(), None);
        assert!(!store.dir().exists());
    }

    #[test]
    fn write_creates_dir_and_one_file_per_key() {
        let root = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(root.path().join("nested"));

        store.write("collision", br#"{"epsilon":0.5}"#).unwrap();

        assert!(store.locate("collision").ends_with("collision.json"));
        assert_eq!(
            fs::read(store.path_for("collision")).unwrap(),
            br#"{"epsilon":0.5}"#
        );
        assert_eq!(store.read("collision").unwrap(), Some(br#"{"epsilon":0.5}"#.to_vec()));
    }

    #[test]
    fn rewrite_replaces_document_and_leaves_no_staging_files() {
        let root = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(root.path());

        store.write("collision", b"{\"epsilon\":0.5,\"padding\":\"long\"}").unwrap();
        store.write("collision", b"{}").unwrap();

        assert_eq!(store.read("collision").unwrap(), Some(b"{}".to_vec()));
        let names: Vec<_> = fs::read_dir(store.dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["collision.json"]);
    }
}
