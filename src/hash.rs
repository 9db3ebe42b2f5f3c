//! Stable translation key generation.
//!
//! A translation hash is a pure function of the source text and its
//! structural context (component name, file path, metadata field path).
//! Line and column numbers are deliberately excluded: unrelated edits must
//! not invalidate already-translated entries.

use sha2::{Digest, Sha256};
use std::sync::LazyLock;

use regex::Regex;

/// Number of lower-case hex characters in a translation hash.
pub const HASH_LEN: usize = 12;

static HASH_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-f0-9]{12}$").expect("hash shape regex"));

/// Generate a stable hash for a translation entry.
///
/// The context pairs are sorted by key before hashing, so callers may pass
/// them in any order. Identical `(text, context)` inputs always yield the
/// same hash across runs and processes.
pub fn translation_hash(source_text: &str, context: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(&str, &str)> = context.to_vec();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut input = String::from(source_text);
    for (key, value) in pairs {
        input.push_str("::");
        input.push_str(key);
        input.push(':');
        input.push_str(value);
    }

    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..HASH_LEN].to_string()
}

/// Check that a hash matches the expected format.
pub fn is_valid_hash(hash: &str) -> bool {
    HASH_SHAPE.is_match(hash)
}
