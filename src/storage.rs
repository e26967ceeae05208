// src/storage.rs
//! Object locations and the storage collaborator
//!
//! Images are addressed as `s3://bucket/key`. [`ObjectStore`] is the seam a
//! real object-store client plugs into; [`FsObjectStore`] keeps objects under
//! a local directory, one subdirectory per bucket.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::LOCATION_SCHEME;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Split `scheme://bucket/key` into bucket and key.
    ///
    /// The key may be empty (`s3://bucket`); it may itself contain slashes.
    pub fn parse(uri: &str) -> Result<Self> {
        let mut tokens = uri.splitn(4, '/');
        let _scheme = tokens.next();
        let separator = tokens.next();
        let bucket = tokens.next().unwrap_or_default();
        let key = tokens.next().unwrap_or_default();

        if separator != Some("") || bucket.is_empty() {
            return Err(CoreError::MalformedRequest(format!(
                "{uri:?} is not an object location"
            )));
        }
        Ok(Self::new(bucket, key))
    }

    /// Last path segment of the key
    pub fn file_name(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or_default()
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LOCATION_SCHEME}{}/{}", self.bucket, self.key)
    }
}

/// Fetch and persist image bytes by location
pub trait ObjectStore {
    fn fetch(&self, location: &ObjectLocation) -> Result<Vec<u8>>;

    fn persist(&self, location: &ObjectLocation, bytes: &[u8]) -> Result<()>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for &S {
    fn fetch(&self, location: &ObjectLocation) -> Result<Vec<u8>> {
        (**self).fetch(location)
    }

    fn persist(&self, location: &ObjectLocation, bytes: &[u8]) -> Result<()> {
        (**self).persist(location, bytes)
    }
}

/// Object store backed by `root/<bucket>/<key>` on the local filesystem
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path an object location maps to
    pub fn path_for(&self, location: &ObjectLocation) -> Result<PathBuf> {
        let mut path = self.root.join(&location.bucket);
        for segment in location.key.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." {
                return Err(CoreError::MalformedRequest(format!(
                    "{location} escapes its bucket"
                )));
            }
            path.push(segment);
        }
        if location.file_name().is_empty() {
            return Err(CoreError::MalformedRequest(format!(
                "{location} does not name an object"
            )));
        }
        Ok(path)
    }
}

impl ObjectStore for FsObjectStore {
    fn fetch(&self, location: &ObjectLocation) -> Result<Vec<u8>> {
        let path = self.path_for(location)?;
        debug!(%location, path = %path.display(), "fetching object");
        std::fs::read(&path).map_err(|source| CoreError::Storage {
            location: location.to_string(),
            source,
        })
    }

    fn persist(&self, location: &ObjectLocation, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(location)?;
        let storage_err = |source| CoreError::Storage {
            location: location.to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(storage_err)?;
        }
        debug!(%location, bytes = bytes.len(), "persisting object");
        std::fs::write(&path, bytes).map_err(storage_err)
    }
}
