//! PhotoStore trait for abstracting photo blob access.
//!
//! The renderer resolves a résumé's photo key through this trait without
//! being tied to filesystem or object-storage access. Absence of a photo is
//! a valid outcome, not a fault.

use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Error type for photo loading operations.
#[derive(Error, Debug, Clone)]
pub enum PhotoError {
    #[error("Photo not found: {0}")]
    NotFound(String),

    #[error("Failed to load photo '{key}': {message}")]
    LoadFailed { key: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PhotoError {
    fn from(err: std::io::Error) -> Self {
        PhotoError::Io(err.to_string())
    }
}

/// Shared photo data type (reference-counted bytes).
pub type SharedPhotoData = Arc<Vec<u8>>;

/// A store of photo blobs addressed by résumé-scoped keys.
///
/// # Implementations
///
/// - `FilesystemPhotoStore`: resolves keys under a base directory
/// - `InMemoryPhotoStore`: pre-populated memory, useful for tests
pub trait PhotoStore: Send + Sync + Debug {
    /// Load a photo by its key.
    fn load(&self, key: &str) -> Result<SharedPhotoData, PhotoError>;

    /// Check whether a photo exists for the key.
    fn exists(&self, key: &str) -> bool;

    /// Human-readable store name for logging.
    fn name(&self) -> &'static str;
}

/// An in-memory photo store; keys must be pre-populated before use.
#[derive(Debug, Default)]
pub struct InMemoryPhotoStore {
    photos: std::sync::RwLock<std::collections::HashMap<String, SharedPhotoData>>,
}

impl InMemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store photo bytes under a key.
    ///
    /// # Errors
    ///
    /// Returns `PhotoError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, key: impl Into<String>, data: Vec<u8>) -> Result<(), PhotoError> {
        let key = key.into();
        let mut photos = self.photos.write().map_err(|_| PhotoError::LoadFailed {
            key: key.clone(),
            message: "photo store lock poisoned".to_string(),
        })?;
        photos.insert(key, Arc::new(data));
        Ok(())
    }

    /// Remove a photo; returns `None` if absent or the lock is poisoned.
    pub fn remove(&self, key: &str) -> Option<SharedPhotoData> {
        self.photos.write().ok()?.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.photos.read().map(|p| p.is_empty()).unwrap_or(true)
    }
}

impl PhotoStore for InMemoryPhotoStore {
    fn load(&self, key: &str) -> Result<SharedPhotoData, PhotoError> {
        let photos = self.photos.read().map_err(|_| PhotoError::LoadFailed {
            key: key.to_string(),
            message: "photo store lock poisoned".to_string(),
        })?;
        photos
            .get(key)
            .cloned()
            .ok_or_else(|| PhotoError::NotFound(key.to_string()))
    }

    fn exists(&self, key: &str) -> bool {
        self.photos
            .read()
            .map(|p| p.contains_key(key))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryPhotoStore"
    }
}

/// A photo store backed by a directory on disk.
///
/// Relative keys resolve under the base directory; a leading `/` is
/// stripped first, so keys stored as server paths still resolve locally.
/// Absolute keys are used as-is.
#[derive(Debug)]
pub struct FilesystemPhotoStore {
    base: PathBuf,
}

impl FilesystemPhotoStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn resolve(&self, key: &str) -> PathBuf {
        let path = Path::new(key);
        if path.is_absolute() {
            let trimmed = key.trim_start_matches('/');
            let candidate = self.base.join(trimmed);
            if candidate.exists() {
                return candidate;
            }
            return path.to_path_buf();
        }
        self.base.join(key)
    }
}

impl PhotoStore for FilesystemPhotoStore {
    fn load(&self, key: &str) -> Result<SharedPhotoData, PhotoError> {
        let path = self.resolve(key);
        if !path.exists() {
            return Err(PhotoError::NotFound(key.to_string()));
        }
        let data = std::fs::read(&path).map_err(|e| PhotoError::LoadFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(Arc::new(data))
    }

    fn exists(&self, key: &str) -> bool {
        self.resolve(key).exists()
    }

    fn name(&self) -> &'static str {
        "FilesystemPhotoStore"
    }
}
