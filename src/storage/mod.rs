//! Article persistence: one self-describing text file per article.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! ├── 1a2b3c4d_Some_Title.txt     # One stored article
//! ├── 5e6f7a8b_Another_Title.txt
//! └── ...
//! ```
//!
//! Filenames are `{url fingerprint}_{sanitized title}.txt`. Uniqueness
//! is enforced by the in-memory [`DuplicateIndex`] over the declared
//! `URL:` headers, not by the filesystem: the index and the directory
//! are kept consistent by [`ArticleStore::put`]'s single critical
//! section and atomic file writes.

pub mod codec;
pub mod filename;
pub mod index;
pub mod store;

use std::path::PathBuf;

// Re-export for convenience
pub use index::DuplicateIndex;
pub use store::ArticleStore;

/// Handle to the on-disk file holding exactly one article.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Filename within the storage directory
    pub file_name: String,
    /// Full path to the stored file
    pub path: PathBuf,
}
