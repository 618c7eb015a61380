//! Triage Web Server
//!
//! Axum-based web server for the intake analysis API.

pub mod routes;

use axum::{routing::post, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the application router.
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/analyze", post(routes::analyze::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the web server.
pub async fn run_server(host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router();

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Analysis server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn post_analyze(body: &str) -> (StatusCode, serde_json::Value) {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_analyze_returns_classification() {
        let (status, json) =
            post_analyze(r#"{"title": "Wifi not working", "description": "immediately"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "suggestedCategory": "IT",
                "suggestedPriority": "High",
                "sentiment": "Urgent"
            })
        );
    }

    #[tokio::test]
    async fn test_analyze_empty_fields_succeed() {
        let (status, json) = post_analyze(r#"{"title": "", "description": ""}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suggestedCategory"], "General");
        assert_eq!(json["suggestedPriority"], "Low");
        assert_eq!(json["sentiment"], "Neutral");
    }

    #[tokio::test]
    async fn test_analyze_ignores_extra_fields() {
        let (status, json) = post_analyze(
            r#"{"title": "Water leak", "description": "in the ceiling", "requester": "sam"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suggestedCategory"], "Facilities");
    }

    #[tokio::test]
    async fn test_analyze_missing_field_is_client_error() {
        let (status, json) = post_analyze(r#"{"title": "Wifi down"}"#).await;

        assert!(status.is_client_error());
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_non_string_field_is_client_error() {
        let (status, json) =
            post_analyze(r#"{"title": "Wifi down", "description": 7}"#).await;

        assert!(status.is_client_error());
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_invalid_json_is_client_error() {
        let (status, json) = post_analyze("{not json").await;

        assert!(status.is_client_error());
        assert!(json["error"].is_string());
    }
}
