//! Blob naming
//!
//! Names are `<field>-<epoch millis>-<random 0..=1e9><original extension>`.
//! Uniqueness is probabilistic; the local store refuses to overwrite, so a
//! collision fails the upload instead of replacing an existing blob.

use chrono::Utc;
use rand::Rng;

const RANDOM_SUFFIX_MAX: u32 = 1_000_000_000;

/// Generate a storage name for a file uploaded under `field_name`.
pub fn storage_name(field_name: &str, original_name: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = rand::rng().random_range(0..=RANDOM_SUFFIX_MAX);
    storage_name_at(field_name, original_name, millis, suffix)
}

pub(crate) fn storage_name_at(
    field_name: &str,
    original_name: &str,
    millis: i64,
    suffix: u32,
) -> String {
    format!(
        "{}-{}-{}{}",
        field_name,
        millis,
        suffix,
        original_extension(original_name)
    )
}

/// Extension of the original filename including the dot, or `""`.
///
/// Only the last path component counts, and a leading dot marks a hidden
/// file rather than an extension (".bashrc" has none).
pub fn original_extension(original_name: &str) -> &str {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);

    match base.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &base[idx..],
    }
}
