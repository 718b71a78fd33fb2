//! Deterministic, filesystem-safe article filenames.
//!
//! Each stored file is named `{fingerprint}_{sanitized_title}.txt`. The
//! fingerprint doubles as the client-visible article ID: short,
//! deterministic, stable across restarts, and not guaranteed unique.

use sha2::{Digest, Sha256};

/// Maximum length of the sanitized title portion.
const MAX_TITLE_LEN: usize = 50;

/// Short hex fingerprint of a source URL (first 4 digest bytes).
pub fn fingerprint(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    hex::encode(&digest[..4])
}

/// Derive the stored filename for an article.
pub fn file_name_for(url: &str, title: &str) -> String {
    format!("{}_{}.txt", fingerprint(url), sanitize_title(title))
}

/// Reduce a title to a filesystem-safe slug: keep ASCII
/// letters/digits/space/hyphen/underscore, collapse whitespace runs to
/// single underscores, cap the length.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    let mut slug = kept.split_whitespace().collect::<Vec<_>>().join("_");
    slug.truncate(MAX_TITLE_LEN);

    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
