//! Ingest service: transport payload in, stored article out.
//!
//! Builds an [`Article`] from a submitted payload (stamping the receive
//! time and deriving the word count) and delegates to the store. Every
//! payload field defaults to an empty string: a sparse or even empty
//! submission produces a sparse record rather than a validation error.
//! That leniency is deliberate and load-bearing for upstream scrapers
//! that cannot always fill every field.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Article, count_words};
use crate::storage::{ArticleStore, filename};

/// A submitted article, as decoded at the transport boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePayload {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub content: String,
}

/// Outcome of an ingest attempt, for the transport layer to map to a
/// status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Stored; `id` is the URL fingerprint for client-side correlation.
    Created { id: String },
    /// An article with this source URL is already stored.
    Duplicate,
}

/// Accepts submitted articles and persists them through the store.
pub struct IngestService {
    store: Arc<ArticleStore>,
}

impl IngestService {
    pub fn new(store: Arc<ArticleStore>) -> Self {
        Self { store }
    }

    /// Ingest one submitted article.
    ///
    /// Storage failures propagate; a duplicate URL is a normal outcome,
    /// not an error.
    pub async fn ingest(&self, payload: ArticlePayload) -> Result<IngestOutcome> {
        let word_count = count_words(&payload.content);
        let article = Article {
            source_url: payload.url,
            title: payload.title,
            author: payload.author,
            publish_date: payload.date,
            received: Utc::now(),
            word_count,
            content: payload.content,
        };

        match self.store.put(&article).await {
            Ok(_) => Ok(IngestOutcome::Created {
                id: filename::fingerprint(&article.source_url),
            }),
            Err(AppError::Duplicate { url }) => {
                log::debug!("Duplicate submission for {url}");
                Ok(IngestOutcome::Duplicate)
            }
            Err(e) => Err(e),
        }
    }

    /// Total number of stored articles.
    pub async fn total(&self) -> usize {
        self.store.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn service(tmp: &TempDir) -> IngestService {
        let store = ArticleStore::open(tmp.path()).await.unwrap();
        IngestService::new(Arc::new(store))
    }

    fn sample_payload(url: &str) -> ArticlePayload {
        ArticlePayload {
            url: url.to_string(),
            title: "Hi There!".to_string(),
            author: "Jane Doe".to_string(),
            date: "2024-03-15".to_string(),
            content: "One. Two. Three.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ingest_returns_fingerprint_id() {
        let tmp = TempDir::new().unwrap();
        let service = service(&tmp).await;

        let outcome = service.ingest(sample_payload("http://x/1")).await.unwrap();
        assert_eq!(
            outcome,
            IngestOutcome::Created {
                id: filename::fingerprint("http://x/1")
            }
        );
        assert_eq!(service.total().await, 1);
    }

    #[tokio::test]
    async fn test_ingest_stamps_time_and_word_count() {
        let tmp = TempDir::new().unwrap();
        let service = service(&tmp).await;
        let before = Utc::now();

        service.ingest(sample_payload("http://x/1")).await.unwrap();

        let store = ArticleStore::open(tmp.path()).await.unwrap();
        let scanned = store.scan().await.unwrap();
        assert_eq!(scanned.len(), 1);
        assert_eq!(scanned[0].word_count, 3);
        assert!(scanned[0].received >= before);
        assert!(scanned[0].received <= Utc::now());
    }

    #[tokio::test]
    async fn test_ingest_duplicate_url() {
        let tmp = TempDir::new().unwrap();
        let service = service(&tmp).await;

        service.ingest(sample_payload("http://x/1")).await.unwrap();
        let outcome = service.ingest(sample_payload("http://x/1")).await.unwrap();
        assert_eq!(outcome, IngestOutcome::Duplicate);
        assert_eq!(service.total().await, 1);
    }

    #[tokio::test]
    async fn test_ingest_accepts_sparse_payload() {
        let tmp = TempDir::new().unwrap();
        let service = service(&tmp).await;

        // Missing fields produce a sparse record, not a rejection.
        let outcome = service.ingest(ArticlePayload::default()).await.unwrap();
        assert!(matches!(outcome, IngestOutcome::Created { .. }));

        let store = ArticleStore::open(tmp.path()).await.unwrap();
        let scanned = store.scan().await.unwrap();
        assert_eq!(scanned[0].source_url, "");
        assert_eq!(scanned[0].word_count, 0);
    }
}
