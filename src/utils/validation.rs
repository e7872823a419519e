use crate::error::IngestError;
use mime::Mime;

/// Validates the declared MIME type against the allowlist.
///
/// The declaration is parsed before the check, so casing and parameters
/// (`image/PNG; charset=binary`) do not matter; absent or malformed
/// declarations fail the same way as off-list ones. Only the declaration is
/// checked, not the actual bytes.
pub fn validate_mime_type(
    content_type: Option<&str>,
    allowed: &[String],
) -> Result<(), IngestError> {
    let declared = content_type.unwrap_or("").trim();

    let parsed: Mime = match declared.parse() {
        Ok(m) => m,
        Err(_) => {
            return Err(IngestError::UnsupportedMediaType {
                declared: declared.to_string(),
            });
        }
    };

    let essence = parsed.essence_str();
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(essence)) {
        return Ok(());
    }

    Err(IngestError::UnsupportedMediaType {
        declared: declared.to_string(),
    })
}

/// Validates the declared size against the maximum limit
pub fn validate_file_size(size: u64, max_size: u64) -> Result<(), IngestError> {
    if size > max_size {
        return Err(IngestError::PayloadTooLarge {
            size,
            max: max_size,
        });
    }
    Ok(())
}
