//! Article data structure.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches the date-path segment of a news URL, e.g.
/// `https://example.com/2024/03/15/politics/some-story/` -> `politics`.
static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\d{4}/\d{2}/\d{2}/([^/]+)/").expect("valid regex"));

/// Matches a run of sentence terminators.
static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// One ingested article: metadata plus full body text.
///
/// The `source_url` is the natural unique key; no two stored articles
/// share one. `word_count` is derived from `content` at ingest time and
/// is never taken from caller input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Source URL, globally unique across the store
    pub source_url: String,

    /// Article headline
    pub title: String,

    /// Author byline
    pub author: String,

    /// Publish date as reported by the source (opaque string)
    pub publish_date: String,

    /// When the server received the article
    pub received: DateTime<Utc>,

    /// Number of whitespace-separated words in `content`
    pub word_count: usize,

    /// Full body text
    pub content: String,
}

impl Article {
    /// Number of sentences in the body, counting runs of `.`, `!`, `?`
    /// as one terminator.
    pub fn sentence_count(&self) -> usize {
        SENTENCE_RE
            .split(&self.content)
            .filter(|s| !s.trim().is_empty())
            .count()
    }

    /// Average words per sentence, or 0.0 for an empty body.
    pub fn avg_words_per_sentence(&self) -> f64 {
        let sentences = self.sentence_count();
        if sentences > 0 {
            self.word_count as f64 / sentences as f64
        } else {
            0.0
        }
    }

    /// Category extracted from the URL's date-path segment, or
    /// `"unknown"` when the URL does not follow that layout.
    pub fn category(&self) -> String {
        CATEGORY_RE
            .captures(&self.source_url)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Count whitespace-separated words in a body text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
