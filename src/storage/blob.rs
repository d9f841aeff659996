//! Blob storage for profile pictures.
//!
//! Pictures are uploaded under a random file name that keeps the original
//! extension. The size limit is enforced by the caller before any upload is
//! attempted (see [`PictureUpload::check_size`]).

use crate::domain::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest accepted profile picture (2 MiB).
pub const MAX_PICTURE_BYTES: usize = 2 * 1024 * 1024;

/// A picture selected in the employee form, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureUpload {
    /// Original file name; only its extension is kept.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PictureUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Rejects pictures over [`MAX_PICTURE_BYTES`].
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Upload`] when the picture is too large.
    pub fn check_size(&self) -> Result<()> {
        if self.bytes.len() > MAX_PICTURE_BYTES {
            return Err(DirectoryError::Upload(
                "Please select a file smaller than 2MB".to_string(),
            ));
        }
        Ok(())
    }

    /// Random object path keeping the original extension, e.g. `3f2a….png`.
    #[must_use]
    pub fn object_path(&self) -> String {
        let stem = uuid::Uuid::new_v4();
        match self.file_name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => format!("{stem}.{ext}"),
            _ => stem.to_string(),
        }
    }
}

/// Abstraction over the blob store holding profile pictures.
pub trait BlobStore: Send {
    /// Stores `bytes` at `path` and returns the public URL.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Upload`] if the object cannot be written.
    fn upload(&mut self, path: &str, bytes: &[u8]) -> Result<String>;
}

/// Filesystem blob store; URLs are `file://` paths.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl BlobStore for FsBlobStore {
    fn upload(&mut self, path: &str, bytes: &[u8]) -> Result<String> {
        let _span = tracing::debug_span!("fs_blob_upload", path = %path, size = bytes.len()).entered();

        if path.contains("..") || path.starts_with('/') {
            return Err(DirectoryError::Upload(format!("invalid object path: {path}")));
        }

        let target = self.root.join(path);
        std::fs::create_dir_all(&self.root)
            .and_then(|()| std::fs::write(&target, bytes))
            .map_err(|e| DirectoryError::Upload(e.to_string()))?;

        tracing::debug!(target = ?target, "picture stored");
        Ok(format!("file://{}", target.display()))
    }
}
