//! HTTP API for single-page SEO reports.
//!
//! `POST /analyze` with `{"url": "..."}` answers with the full report of that
//! page. `GET /` and `GET /health` are liveness probes.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use seolens_core::{AnalyzerConfig, SeoAnalyzer};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// Shared state of all handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SeoAnalyzer>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> seolens_core::Result<Self> {
        let analyzer_config = AnalyzerConfig::builder().timeout(config.fetch_timeout.as_secs()).build();
        Ok(Self { analyzer: Arc::new(SeoAnalyzer::new(analyzer_config)?) })
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app() -> Router {
        let config = ServerConfig { fetch_timeout: Duration::from_secs(5), ..Default::default() };
        build_router(AppState::new(&config).unwrap(), &config)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn analyze_request(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["message"], "SeoLens API is running");
        assert_eq!(json["status"], "online");
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].as_f64().unwrap() > 1_600_000_000.0);
    }

    #[tokio::test]
    async fn test_analyze_invalid_url() {
        let response = app().oneshot(analyze_request(r#"{"url": "not a url"}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert!(json["error"].as_str().unwrap().contains("Invalid URL"));
    }

    #[tokio::test]
    async fn test_analyze_missing_field() {
        let response = app().oneshot(analyze_request(r#"{"address": "https://example.com"}"#)).await.unwrap();

        assert!(response.status().is_client_error());
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<html><head><title>Rust news</title></head><body><p>Rust release notes, rust tooling</p></body></html>",
                "text/html; charset=utf-8",
            ))
            .mount(&server)
            .await;

        let body = format!(r#"{{"url": "{}/"}}"#, server.uri());
        let response = app().oneshot(analyze_request(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let json = json_body(response).await;
        assert_eq!(json["status"], "success");
        assert_eq!(json["basic_info"]["title"], "Rust news");
        assert_eq!(json["content"]["top_keywords"][0]["word"], "rust");
        assert_eq!(json["technical"]["status_code"], 200);
    }

    #[tokio::test]
    async fn test_analyze_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(410))
            .mount(&server)
            .await;

        let body = format!(r#"{{"url": "{}/gone"}}"#, server.uri());
        let response = app().oneshot(analyze_request(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"], "Failed to load page: HTTP 410");
    }

    #[tokio::test]
    async fn test_analyze_upstream_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = ServerConfig { fetch_timeout: Duration::from_secs(1), ..Default::default() };
        let app = build_router(AppState::new(&config).unwrap(), &config);
        let body = format!(r#"{{"url": "{}/slow"}}"#, server.uri());
        let response = app.oneshot(analyze_request(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert!(json_body(response).await["error"].as_str().unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/analyze")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }
}
