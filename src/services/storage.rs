use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Storage capability the media service persists through.
///
/// Four primitives are all the service needs; any hierarchical byte store
/// that can answer them satisfies the contract (local disk, a mounted
/// network volume, or an object-store adapter).
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn exists(&self, path: &Path) -> Result<bool>;
    async fn create_dir_all(&self, path: &Path) -> Result<()>;
    async fn write(&self, path: &Path, data: &[u8]) -> Result<()>;
    async fn remove_file(&self, path: &Path) -> Result<()>;
}

/// Local filesystem backend on tokio's async file I/O
pub struct LocalStorage;

#[async_trait]
impl StorageBackend for LocalStorage {
    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(tokio::fs::try_exists(path).await?)
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        tokio::fs::create_dir_all(path).await?;
        Ok(())
    }

    async fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        tokio::fs::write(path, data).await?;
        Ok(())
    }

    async fn remove_file(&self, path: &Path) -> Result<()> {
        tokio::fs::remove_file(path).await?;
        Ok(())
    }
}
