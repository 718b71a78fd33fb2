//! JSON response bodies for the HTTP interface.

use serde::Serialize;

/// Body returned when an article is stored.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    /// URL fingerprint, for client-side correlation
    pub id: String,
}

/// Generic error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for the stats endpoint.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "totalArticles")]
    pub total_articles: usize,
}
