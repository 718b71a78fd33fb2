//! Filesystem article store.
//!
//! The sole reader/writer of the storage directory. One text file per
//! article, a mutex-guarded [`DuplicateIndex`] for source-URL
//! uniqueness, and atomic writes so a scan never observes a partially
//! written record.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::models::Article;
use crate::storage::index::DuplicateIndex;
use crate::storage::{StoredFile, codec, filename};

/// Article store rooted at a single directory.
pub struct ArticleStore {
    root_dir: PathBuf,
    /// Guards the whole check-then-write sequence in [`put`], so two
    /// concurrent puts for the same URL cannot both observe "absent".
    ///
    /// [`put`]: ArticleStore::put
    index: Mutex<DuplicateIndex>,
}

impl ArticleStore {
    /// Open a store, creating the directory if needed and rebuilding
    /// the duplicate index from the files already present.
    ///
    /// Fails if the directory cannot be created or listed; a store that
    /// cannot see its own files cannot guarantee uniqueness, so the
    /// caller should refuse to serve.
    pub async fn open(root_dir: impl Into<PathBuf>) -> Result<Self> {
        let root_dir = root_dir.into();
        tokio::fs::create_dir_all(&root_dir).await?;

        let index = DuplicateIndex::rebuild(&root_dir).await?;
        log::info!(
            "Loaded {} existing articles from {}",
            index.len(),
            root_dir.display()
        );

        Ok(Self {
            root_dir,
            index: Mutex::new(index),
        })
    }

    /// Storage directory this store owns.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Store one article, enforcing source-URL uniqueness.
    ///
    /// Returns [`AppError::Duplicate`] if the URL is already stored.
    /// The index is updated only after the file write has committed, so
    /// a failed write leaves index and filesystem in agreement.
    pub async fn put(&self, article: &Article) -> Result<StoredFile> {
        let mut index = self.index.lock().await;

        if index.contains(&article.source_url) {
            return Err(AppError::duplicate(&article.source_url));
        }

        let file_name = filename::file_name_for(&article.source_url, &article.title);
        let path = self.root_dir.join(&file_name);
        let text = codec::encode(article);

        write_atomic(&path, text.as_bytes()).await?;
        index.add(&article.source_url);

        log::info!(
            "Saved article '{}' ({} words) to {}",
            article.title,
            article.word_count,
            file_name
        );

        Ok(StoredFile { file_name, path })
    }

    /// Decode every stored article, re-reading the directory on each
    /// call.
    ///
    /// Structurally corrupt or unreadable files are skipped with a
    /// warning; a single bad file never aborts the scan.
    pub async fn scan(&self) -> Result<Vec<Article>> {
        let mut articles = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root_dir).await?;

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

            match codec::decode(&text) {
                Ok(article) => articles.push(article),
                Err(e) => {
                    log::warn!("Skipping corrupt file {}: {}", path.display(), e);
                }
            }
        }

        Ok(articles)
    }

    /// Number of stored articles, from the in-memory index.
    pub async fn count(&self) -> usize {
        self.index.lock().await.len()
    }
}

/// Write bytes atomically (write to temp, then rename).
///
/// The temp file is removed on failure, so an aborted write leaves
/// neither a visible record nor a stray partial file claiming one.
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension("tmp");

    let result: Result<()> = async {
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
    .await;

    if result.is_err() {
        let _ = tokio::fs::remove_file(&tmp).await;
    }

    result
}
