//! In-memory duplicate-detection index.
//!
//! A set of every source URL currently stored on disk, rebuilt from the
//! storage directory at startup and consulted before every write. The
//! rebuild trusts each file's declared `URL:` header, never its
//! filename.

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::storage::codec;

/// Set of source URLs with a stored article.
#[derive(Debug, Default)]
pub struct DuplicateIndex {
    urls: HashSet<String>,
}

impl DuplicateIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an article with this source URL is already stored.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Record a source URL as stored. Idempotent.
    pub fn add(&mut self, url: &str) {
        self.urls.insert(url.to_string());
    }

    /// Number of known source URLs.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Rebuild the index from every `.txt` file in a directory.
    ///
    /// Best effort per file: an unreadable file or one without a `URL:`
    /// header is skipped with a warning. Only a directory-level read
    /// failure is an error, since then no dedup guarantee is possible.
    pub async fn rebuild(dir: &Path) -> Result<Self> {
        let mut index = Self::new();
        let mut entries = tokio::fs::read_dir(dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }

            let text = match tokio::fs::read_to_string(&path).await {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Skipping unreadable file {}: {}", path.display(), e);
                    continue;
                }
            };

            match codec::header_url(&text) {
                Some(url) => index.add(&url),
                None => {
                    log::warn!("Skipping file without URL header: {}", path.display());
                }
            }
        }

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::models::{Article, count_words};
    use crate::storage::codec::encode;

    fn sample_article(url: &str) -> Article {
        let content = "Some body text.".to_string();
        Article {
            source_url: url.to_string(),
            title: "Title".to_string(),
            author: "Author".to_string(),
            publish_date: "2024-01-01".to_string(),
            received: chrono::Utc::now(),
            word_count: count_words(&content),
            content,
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut index = DuplicateIndex::new();
        index.add("http://x/1");
        index.add("http://x/1");
        assert_eq!(index.len(), 1);
        assert!(index.contains("http://x/1"));
        assert!(!index.contains("http://x/2"));
    }

    #[tokio::test]
    async fn test_rebuild_reads_url_headers() {
        let tmp = TempDir::new().unwrap();
        for i in 0..3 {
            let article = sample_article(&format!("http://x/{i}"));
            let name = format!("file{i}.txt");
            std::fs::write(tmp.path().join(name), encode(&article)).unwrap();
        }

        let index = DuplicateIndex::rebuild(tmp.path()).await.unwrap();
        assert_eq!(index.len(), 3);
        assert!(index.contains("http://x/0"));
        assert!(index.contains("http://x/2"));
    }

    #[tokio::test]
    async fn test_rebuild_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let article = sample_article("http://x/1");
        std::fs::write(tmp.path().join("a.txt"), encode(&article)).unwrap();

        let first = DuplicateIndex::rebuild(tmp.path()).await.unwrap();
        let second = DuplicateIndex::rebuild(tmp.path()).await.unwrap();
        assert_eq!(first.urls, second.urls);
    }

    #[tokio::test]
    async fn test_rebuild_skips_malformed_files() {
        let tmp = TempDir::new().unwrap();
        let article = sample_article("http://x/1");
        std::fs::write(tmp.path().join("good.txt"), encode(&article)).unwrap();
        std::fs::write(tmp.path().join("junk.txt"), "no headers here").unwrap();
        std::fs::write(tmp.path().join("notes.md"), "URL: http://x/9").unwrap();

        let index = DuplicateIndex::rebuild(tmp.path()).await.unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.contains("http://x/1"));
    }

    #[tokio::test]
    async fn test_rebuild_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(DuplicateIndex::rebuild(&missing).await.is_err());
    }
}
