use thiserror::Error;

/// Failure modes of media ingestion.
///
/// The only error type that crosses the service boundary. Variants preserve
/// the specific cause for logging and branching; `UnsupportedMediaType` and
/// `PayloadTooLarge` are correctable by the uploader, `StorageWriteFailed`
/// is an operational incident.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("MIME type '{declared}' is not allowed for media uploads")]
    UnsupportedMediaType { declared: String },

    #[error("file size {size} bytes exceeds maximum allowed {max} bytes")]
    PayloadTooLarge { size: u64, max: u64 },

    #[error("storage rejected write: {source}")]
    StorageWriteFailed {
        #[source]
        source: anyhow::Error,
    },
}

impl IngestError {
    /// Whether the uploader can fix the failure by changing their input
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            IngestError::UnsupportedMediaType { .. } | IngestError::PayloadTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_distinguish_causes() {
        let type_err = IngestError::UnsupportedMediaType {
            declared: "application/pdf".to_string(),
        };
        assert!(type_err.to_string().contains("application/pdf"));

        let size_err = IngestError::PayloadTooLarge {
            size: 6 * 1024 * 1024,
            max: 5 * 1024 * 1024,
        };
        assert!(size_err.to_string().contains("6291456"));
        assert!(size_err.to_string().contains("5242880"));
    }

    #[test]
    fn test_user_correctable() {
        assert!(
            IngestError::UnsupportedMediaType {
                declared: "text/html".to_string()
            }
            .is_user_correctable()
        );
        assert!(
            IngestError::PayloadTooLarge { size: 1, max: 0 }.is_user_correctable()
        );
        assert!(
            !IngestError::StorageWriteFailed {
                source: anyhow::anyhow!("disk full")
            }
            .is_user_correctable()
        );
    }
}
