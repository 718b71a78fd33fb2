//! Read-only aggregates over scanned articles.
//!
//! Everything here is a derived view of [`ArticleStore::scan`] output;
//! nothing writes back to the store.
//!
//! [`ArticleStore::scan`]: crate::storage::ArticleStore::scan

pub mod export;

use std::collections::HashMap;

use crate::models::Article;

/// A scanned batch of articles with aggregate queries.
#[derive(Debug, Default)]
pub struct ArticleCollection {
    articles: Vec<Article>,
}

impl ArticleCollection {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// All articles in the collection.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Total number of articles.
    pub fn total(&self) -> usize {
        self.articles.len()
    }

    /// Article count per author.
    pub fn by_author(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for article in &self.articles {
            *counts.entry(article.author.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Article count per URL category.
    pub fn by_category(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for article in &self.articles {
            *counts.entry(article.category()).or_insert(0) += 1;
        }
        counts
    }

    /// Article count per publish date (grouped by the raw date string).
    pub fn by_publish_date(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for article in &self.articles {
            *counts.entry(article.publish_date.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Average word count per URL category.
    pub fn avg_word_count_by_category(&self) -> HashMap<String, f64> {
        let mut sums: HashMap<String, (usize, usize)> = HashMap::new();
        for article in &self.articles {
            let entry = sums.entry(article.category()).or_insert((0, 0));
            entry.0 += article.word_count;
            entry.1 += 1;
        }

        sums.into_iter()
            .map(|(category, (total, count))| (category, total as f64 / count as f64))
            .collect()
    }

    /// The `n` longest articles by word count, descending.
    pub fn top_by_word_count(&self, n: usize) -> Vec<&Article> {
        let mut sorted: Vec<&Article> = self.articles.iter().collect();
        sorted.sort_by(|a, b| b.word_count.cmp(&a.word_count));
        sorted.truncate(n);
        sorted
    }
}
