//! Primary storage channel implementations.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::error::Result;

/// Durable key-value channel backing the credential store.
///
/// Reads are infallible: a channel that cannot produce a value reports
/// absence. Write and delete failures surface to the caller.
pub trait Channel: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`. Deleting an absent key is not
    /// an error.
    fn delete(&self, key: &str) -> Result<()>;
}

impl<C: Channel + ?Sized> Channel for Arc<C> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

/// File-backed channel: one file per key under a data directory.
///
/// Entries survive process restarts. The directory is created lazily on
/// first write.
#[derive(Debug)]
pub struct FileChannel {
    dir: PathBuf,
}

impl FileChannel {
    /// Create a channel rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Channel for FileChannel {
    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, error = %err, "failed to read stored credential entry");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory channel for tests and headless tooling.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Channel for MemoryChannel {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
