pub mod config;
pub mod error;
pub mod services;
pub mod utils;

pub use config::MediaConfig;
pub use error::IngestError;
pub use services::media::{MediaFile, MediaService};
pub use services::storage::{LocalStorage, StorageBackend};
