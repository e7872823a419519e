use chrono::Utc;
use rand::Rng;
use std::path::Path;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a storage filename of the form `<epoch-millis>-<token><ext>`.
///
/// Uniqueness is probabilistic, not guaranteed: two ingestions in the same
/// millisecond rely on their tokens differing. No locking is involved.
pub fn storage_filename(original_name: &str, token_length: usize) -> String {
    format!(
        "{}-{}{}",
        Utc::now().timestamp_millis(),
        random_token(token_length),
        extension_of(original_name),
    )
}

/// Extension of the file-name component of `name`, leading dot included.
///
/// Case is preserved exactly as supplied; the result is empty when there is
/// no dot-suffix. A leading dot alone (`.htaccess`) does not count as one.
pub fn extension_of(name: &str) -> &str {
    let file_name = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[idx..],
        _ => "",
    }
}

/// Random lowercase base-36 token
pub fn random_token(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}
