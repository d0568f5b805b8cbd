use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::ExpertError;
use crate::fs::atomic_write;

/// Computes the cache key of a request: hex SHA-256 of the rendered prompt
/// immediately followed by the payload.
pub fn cache_key(prompt: &str, payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}

/// Write-once response store with one file per key.
///
/// Entries are never updated, expired or evicted. A cache built with
/// [`ResponseCache::disabled`] misses every lookup and drops every store.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    dir: Option<PathBuf>,
}

impl ResponseCache {
    pub const fn disabled() -> Self {
        Self { dir: None }
    }

    /// Opens a cache rooted at an existing directory.
    ///
    /// The directory is never created here; it belongs to the caller.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ExpertError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(ExpertError::CacheDirectoryMissing(dir));
        }
        Ok(Self { dir: Some(dir) })
    }

    pub const fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    /// Path of the file holding `key`, if caching is enabled.
    pub fn entry_path(&self, key: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(key))
    }

    pub fn lookup(&self, key: &str) -> Result<Option<String>, ExpertError> {
        let Some(path) = self.entry_path(key) else {
            return Ok(None);
        };

        // An empty entry is treated as never answered
        match fs::read_to_string(&path) {
            Ok(text) if text.is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ExpertError::CacheRead { path, source }),
        }
    }

    pub fn store(&self, key: &str, value: &str) -> Result<(), ExpertError> {
        let Some(path) = self.entry_path(key) else {
            return Ok(());
        };

        atomic_write(&path, value).map_err(|source| ExpertError::CacheWrite { path, source })
    }
}
