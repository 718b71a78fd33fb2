//! HTTP handlers for article submission and stats.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use super::types::{ErrorResponse, StatsResponse, SubmitResponse};
use crate::ingest::{ArticlePayload, IngestOutcome, IngestService};

/// `POST /api/articles` — store a submitted article.
///
/// `201` on success, `409` on a duplicate source URL, `400` when the
/// body is not decodable JSON at all, `500` on a storage failure. Field
/// validation is deliberately absent: sparse payloads are accepted.
pub async fn handle_submit_article(
    Extension(service): Extension<Arc<IngestService>>,
    payload: Result<Json<ArticlePayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            log::warn!("Rejected article payload: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid request body".to_string(),
                }),
            )
                .into_response();
        }
    };

    match service.ingest(payload).await {
        Ok(IngestOutcome::Created { id }) => (
            StatusCode::CREATED,
            Json(SubmitResponse {
                message: "Article saved".to_string(),
                id,
            }),
        )
            .into_response(),
        Ok(IngestOutcome::Duplicate) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Article already exists".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            log::error!("Failed to save article: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save article".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// `GET /api/articles` — total stored article count.
pub async fn handle_article_stats(
    Extension(service): Extension<Arc<IngestService>>,
) -> (StatusCode, Json<StatsResponse>) {
    (
        StatusCode::OK,
        Json(StatsResponse {
            total_articles: service.total().await,
        }),
    )
}
