//! Small display helpers for download listings and transcripts.

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human-readable size for download listings.
pub fn bytes_to_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Byte".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    format!("{} {}", value.round(), SIZE_UNITS[exponent])
}

/// 32-bit folding hash used to fingerprint transcript content.
///
/// Folds UTF-16 code units so fingerprints match ones computed by the web
/// surface.
pub fn fold_hash(s: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash
}
