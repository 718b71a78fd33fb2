//! HTTP transport for article ingestion.
//!
//! The transport is a thin boundary: decode the payload, call the
//! ingest service, map the outcome to a status code. Everything else
//! (uniqueness, persistence) lives behind [`IngestService`].

pub mod handlers;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::Extension;
use axum::routing::post;
use tower_http::cors::CorsLayer;

use crate::error::Result;
use crate::ingest::IngestService;

/// Build the application router.
pub fn router(service: Arc<IngestService>) -> Router {
    Router::new()
        .route(
            "/api/articles",
            post(handlers::handle_submit_article).get(handlers::handle_article_stats),
        )
        .layer(CorsLayer::permissive())
        .layer(Extension(service))
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, service: Arc<IngestService>) -> Result<()> {
    let app = router(service);

    log::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::storage::ArticleStore;

    async fn test_router(tmp: &TempDir) -> Router {
        let store = ArticleStore::open(tmp.path()).await.unwrap();
        router(Arc::new(IngestService::new(Arc::new(store))))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/articles")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submit_article_created() {
        let tmp = TempDir::new().unwrap();
        let app = test_router(&tmp).await;

        let body = r#"{"url":"http://x/1","title":"Hi","author":"A","date":"2024-01-01","content":"One. Two."}"#;
        let response = app.oneshot(post_json(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Article saved");
        assert_eq!(json["id"].as_str().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_submit_duplicate_conflicts() {
        let tmp = TempDir::new().unwrap();
        let app = test_router(&tmp).await;

        let body = r#"{"url":"http://x/1","title":"Hi","content":"Body."}"#;
        let first = app.clone().oneshot(post_json(body)).await.unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app.oneshot(post_json(body)).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let json = body_json(second).await;
        assert_eq!(json["error"], "Article already exists");
    }

    #[tokio::test]
    async fn test_submit_undecodable_body_is_bad_request() {
        let tmp = TempDir::new().unwrap();
        let app = test_router(&tmp).await;

        let response = app.oneshot(post_json("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_stats_counts_distinct_articles() {
        let tmp = TempDir::new().unwrap();
        let app = test_router(&tmp).await;

        for i in 0..3 {
            let body = format!(r#"{{"url":"http://x/{i}","title":"T","content":"Body."}}"#);
            let response = app.clone().oneshot(post_json(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/articles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["totalArticles"], 3);
    }

    #[tokio::test]
    async fn test_cross_origin_requests_allowed() {
        let tmp = TempDir::new().unwrap();
        let app = test_router(&tmp).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/articles")
                    .header(header::ORIGIN, "http://elsewhere.test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
