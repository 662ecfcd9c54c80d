use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::store::error::StoreError;

/// A collection persisted as one pretty-printed JSON array per file.
///
/// Nothing is cached: every call goes back to disk. The mutex only
/// serializes access to the file within this process, so a read-modify-write
/// done through [`JsonFile::modify`] cannot interleave with another one.
/// Separate processes writing the same file can still overwrite each other.
#[derive(Debug)]
pub struct JsonFile<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record, creating the file as `[]` if it does not exist yet
    pub fn read(&self) -> Result<Vec<T>, StoreError> {
        let _guard = self.lock.lock();
        self.read_unlocked()
    }

    /// Replace the file content with `records`
    pub fn write(&self, records: &[T]) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        self.write_unlocked(records)
    }

    /// Read, let `f` mutate the records, then write them back.
    ///
    /// If `f` fails nothing is written and its error is returned as is.
    pub fn modify<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock();
        let mut records = self.read_unlocked()?;
        let outcome = f(&mut records)?;
        self.write_unlocked(&records)?;
        Ok(outcome)
    }

    fn read_unlocked(&self) -> Result<Vec<T>, StoreError> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
            }
            fs::write(&self.path, "[]").map_err(|source| self.io_error(source))?;
            log::info!("Created empty store file {}", self.path.display());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        serde_json::from_str(&data).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn write_unlocked(&self, records: &[T]) -> Result<(), StoreError> {
        // serde_json's pretty printer indents with two spaces
        let data = serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        // Write beside the target and rename over it so readers never see a
        // half-written file
        let staging = self.staging_path();
        fs::write(&staging, data).map_err(|source| self.io_error(source))?;
        fs::rename(&staging, &self.path).map_err(|source| self.io_error(source))
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
