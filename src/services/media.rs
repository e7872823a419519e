use crate::config::MediaConfig;
use crate::error::IngestError;
use crate::services::storage::StorageBackend;
use crate::utils::{filename, validation};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Caller-supplied descriptor for a file to ingest.
///
/// `content_type` and `size` are declared by the caller and are what gets
/// validated; the bytes are written verbatim and never sniffed, so a spoofed
/// declaration goes undetected here.
pub struct MediaFile {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub size: u64,
    pub original_name: String,
}

impl MediaFile {
    /// Descriptor whose declared size is taken from the buffer itself
    pub fn from_bytes(
        bytes: Vec<u8>,
        content_type: impl Into<String>,
        original_name: impl Into<String>,
    ) -> Self {
        let size = bytes.len() as u64;
        Self {
            bytes,
            content_type: Some(content_type.into()),
            size,
            original_name: original_name.into(),
        }
    }
}

/// Validates, names, stores, and removes uploaded media files.
///
/// The service holds no index of stored assets; the caller persists the
/// returned reference wherever it needs it and hands it back for removal.
pub struct MediaService {
    storage: Arc<dyn StorageBackend>,
    config: MediaConfig,
}

impl MediaService {
    pub fn new(storage: Arc<dyn StorageBackend>, config: MediaConfig) -> Self {
        Self { storage, config }
    }

    /// Validates and persists a file, returning its public reference.
    ///
    /// Validation short-circuits on the first failure: MIME type, then
    /// declared size, then storage effects. The category directory is
    /// created on demand; recreating an existing one is a no-op. On any
    /// error nothing has been stored.
    pub async fn ingest(
        &self,
        file: &MediaFile,
        category: Option<&str>,
    ) -> Result<String, IngestError> {
        let category = category.unwrap_or(&self.config.default_category);

        validation::validate_mime_type(
            file.content_type.as_deref(),
            &self.config.allowed_mime_types,
        )?;
        validation::validate_file_size(file.size, self.config.max_file_size)?;

        let dir = self.config.storage_root.join(category);
        self.storage
            .create_dir_all(&dir)
            .await
            .map_err(|source| IngestError::StorageWriteFailed { source })?;

        let filename = filename::storage_filename(&file.original_name, self.config.token_length);
        let path = dir.join(&filename);

        self.storage
            .write(&path, &file.bytes)
            .await
            .map_err(|source| IngestError::StorageWriteFailed { source })?;

        tracing::debug!(
            category,
            filename = %filename,
            size = file.bytes.len(),
            "stored media file"
        );

        Ok(format!("{}/{}/{}", self.mount_prefix(), category, filename))
    }

    /// Best-effort removal of a previously returned reference.
    ///
    /// Never fails loud. Absent, empty, and malformed references are no-ops,
    /// as is a missing file at the resolved path. A failed delete is logged
    /// and swallowed.
    pub async fn remove(&self, reference: Option<&str>) {
        let Some(reference) = reference.filter(|r| !r.is_empty()) else {
            return;
        };

        let Some(path) = self.resolve_reference(reference) else {
            tracing::warn!(reference, "ignoring media reference outside the storage root");
            return;
        };

        match self.storage.exists(&path).await {
            Ok(false) => {}
            Ok(true) => {
                if let Err(e) = self.storage.remove_file(&path).await {
                    tracing::warn!(reference, error = %e, "failed to delete stored media file");
                }
            }
            Err(e) => {
                tracing::warn!(reference, error = %e, "could not check stored media file");
            }
        }
    }

    /// Maps a public reference back to its path under the storage root.
    ///
    /// Returns `None` for references that do not carry the configured mount
    /// prefix or whose remainder is not a plain relative path (traversal
    /// components, absolute paths).
    pub fn resolve_reference(&self, reference: &str) -> Option<PathBuf> {
        let relative = reference
            .strip_prefix(self.mount_prefix())?
            .trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }

        let candidate = Path::new(relative);
        if candidate
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }

        Some(self.config.storage_root.join(candidate))
    }

    fn mount_prefix(&self) -> &str {
        self.config.public_mount.trim_end_matches('/')
    }
}
