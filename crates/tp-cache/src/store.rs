//! Directory-backed content-addressed store.
//!
//! # Write protocol
//!
//! `save` encodes the whole payload in memory, writes it to
//! `<key>.<ext>.tmp`, syncs it, then renames it over `<key>.<ext>`.  A crash
//! or I/O failure part-way through leaves at most a `.tmp` file, which
//! `exists` and `load` never look at, so a torn write cannot be mistaken for
//! a cache hit.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tp_core::{CacheKind, TpError};

use crate::{CacheError, CacheKey, CacheResult};

/// Encode/decode contract for one cached payload type.
pub trait CacheCodec {
    type Value;

    /// Which cache this codec backs; used in log messages.
    const KIND: CacheKind;

    /// File extension of entries, without the dot.
    const EXTENSION: &'static str = "json";

    fn encode(value: &Self::Value) -> CacheResult<Vec<u8>>;

    fn decode(bytes: &[u8]) -> CacheResult<Self::Value>;
}

/// A directory of entries named by [`CacheKey`], each holding one
/// `C::Value`.
#[derive(Debug)]
pub struct ContentCache<C: CacheCodec> {
    dir:    PathBuf,
    _codec: PhantomData<C>,
}

impl<C: CacheCodec> Clone for ContentCache<C> {
    fn clone(&self) -> Self {
        Self { dir: self.dir.clone(), _codec: PhantomData }
    }
}

impl<C: CacheCodec> ContentCache<C> {
    /// Fails with `InvalidConfiguration` if `dir` is empty.  The directory
    /// itself is only created on the first `save`.
    pub fn new(dir: impl Into<PathBuf>) -> CacheResult<Self> {
        let dir = dir.into();
        if dir.as_os_str().is_empty() {
            return Err(TpError::InvalidConfiguration(format!("{} cache directory is empty", C::KIND)).into());
        }
        Ok(Self { dir, _codec: PhantomData })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the entry for `key`, whether or not it exists.
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(format!("{key}.{}", C::EXTENSION))
    }

    pub fn exists(&self, key: &CacheKey) -> bool {
        self.path_for(key).is_file()
    }

    /// Read and decode the entry for `key`.
    ///
    /// Returns `Ok(None)` when no entry exists.  An entry that exists but
    /// cannot be read is [`CacheError::Io`]; one that cannot be decoded is
    /// [`CacheError::Corrupt`].
    pub fn load(&self, key: &CacheKey) -> CacheResult<Option<C::Value>> {
        let path = self.path_for(key);
        log::info!("Loading {} from {}", C::KIND, path.display());

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No cached {} for key {key}", C::KIND);
                return Ok(None);
            }
            Err(source) => return Err(CacheError::Io { path, source }),
        };

        let value = C::decode(&bytes).map_err(|e| CacheError::Corrupt {
            path:   path.clone(),
            reason: e.to_string(),
        })?;
        log::info!("Loaded {} ({} bytes)", C::KIND, bytes.len());
        Ok(Some(value))
    }

    /// Encode `value` and store it under `key`, replacing any existing entry.
    pub fn save(&self, key: &CacheKey, value: &C::Value) -> CacheResult<()> {
        let path = self.path_for(key);
        log::info!("Saving {} to {}", C::KIND, path.display());

        fs::create_dir_all(&self.dir).map_err(|source| CacheError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let bytes = C::encode(value)?;
        let tmp = path.with_extension(format!("{}.tmp", C::EXTENSION));

        if let Err(source) = write_synced(&tmp, &bytes) {
            let _ = fs::remove_file(&tmp);
            return Err(CacheError::Io { path: tmp, source });
        }
        if let Err(source) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(CacheError::Io { path, source });
        }

        log::info!("Saved {} ({} bytes)", C::KIND, bytes.len());
        Ok(())
    }

    /// Delete the entry for `key`.  Returns `false` if there was none.
    pub fn remove(&self, key: &CacheKey) -> CacheResult<bool> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CacheError::Io { path, source }),
        }
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
