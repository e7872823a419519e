use anyhow::{Result, anyhow};
use async_trait::async_trait;
use media_store::{IngestError, LocalStorage, MediaConfig, MediaFile, MediaService, StorageBackend};
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

/// Backend whose mutations always fail, standing in for a full disk or a
/// permission problem.
struct FailingStorage;

#[async_trait]
impl StorageBackend for FailingStorage {
    async fn exists(&self, _path: &Path) -> Result<bool> {
        Ok(true)
    }

    async fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    async fn write(&self, _path: &Path, _data: &[u8]) -> Result<()> {
        Err(anyhow!("disk full"))
    }

    async fn remove_file(&self, _path: &Path) -> Result<()> {
        Err(anyhow!("permission denied"))
    }
}

#[tokio::test]
async fn test_local_storage_primitives() {
    let dir = tempdir().unwrap();
    let storage = LocalStorage;

    let subdir = dir.path().join("a/b/c");
    assert!(!storage.exists(&subdir).await.unwrap());

    storage.create_dir_all(&subdir).await.unwrap();
    // Recreating an existing directory is a no-op
    storage.create_dir_all(&subdir).await.unwrap();
    assert!(storage.exists(&subdir).await.unwrap());

    let file = subdir.join("data.bin");
    storage.write(&file, b"payload").await.unwrap();
    assert!(storage.exists(&file).await.unwrap());
    assert_eq!(tokio::fs::read(&file).await.unwrap(), b"payload");

    storage.remove_file(&file).await.unwrap();
    assert!(!storage.exists(&file).await.unwrap());
}

#[tokio::test]
async fn test_failed_write_surfaces_as_storage_error() {
    let service = MediaService::new(
        Arc::new(FailingStorage),
        MediaConfig::new("/srv/media", "/uploads"),
    );

    let file = MediaFile::from_bytes(b"bytes".to_vec(), "image/jpeg", "photo.jpg");
    let err = service.ingest(&file, None).await.unwrap_err();

    match &err {
        IngestError::StorageWriteFailed { source } => {
            assert!(source.to_string().contains("disk full"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.is_user_correctable());
}

#[tokio::test]
async fn test_remove_swallows_backend_failures() {
    let service = MediaService::new(
        Arc::new(FailingStorage),
        MediaConfig::new("/srv/media", "/uploads"),
    );

    // exists() reports true, remove_file() fails; the failure must not escape
    service.remove(Some("/uploads/profiles/123-abcd.jpg")).await;
}
