use std::env;
use std::path::PathBuf;

/// Configuration for media ingestion and storage
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Root directory files are written under
    pub storage_root: PathBuf,

    /// Public mount point prefixed to returned references (default: "/uploads")
    pub public_mount: String,

    /// Maximum declared file size in bytes (default: 5 MiB)
    pub max_file_size: u64,

    /// Declared MIME types accepted for ingestion
    pub allowed_mime_types: Vec<String>,

    /// Length of the random token in generated filenames (default: 8, minimum 4)
    pub token_length: usize,

    /// Category used when the caller does not supply one (default: "profiles")
    pub default_category: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("uploads"),
            public_mount: "/uploads".to_string(),
            max_file_size: 5 * 1024 * 1024, // 5 MiB
            allowed_mime_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/gif".to_string(),
                "image/webp".to_string(),
            ],
            token_length: 8,
            default_category: "profiles".to_string(),
        }
    }
}

impl MediaConfig {
    /// Create a config with an explicit storage root and public mount point,
    /// keeping the default policy values
    pub fn new(storage_root: impl Into<PathBuf>, public_mount: impl Into<String>) -> Self {
        Self {
            storage_root: storage_root.into(),
            public_mount: public_mount.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            storage_root: env::var("MEDIA_STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or(default.storage_root),

            public_mount: env::var("MEDIA_PUBLIC_MOUNT").unwrap_or(default.public_mount),

            max_file_size: env::var("MEDIA_MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),

            allowed_mime_types: env::var("MEDIA_ALLOWED_TYPES")
                .ok()
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                })
                .filter(|v| !v.is_empty())
                .unwrap_or(default.allowed_mime_types),

            token_length: env::var("MEDIA_TOKEN_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n >= 4)
                .unwrap_or(default.token_length),

            default_category: env::var("MEDIA_DEFAULT_CATEGORY").unwrap_or(default.default_category),
        }
    }
}
