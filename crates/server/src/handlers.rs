use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, header::HeaderName};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use time::OffsetDateTime;
use tracing::Instrument;
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Debug, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "SeoLens API is running", "status": "online" }))
}

pub async fn health() -> Json<Value> {
    let now = OffsetDateTime::now_utc();
    let timestamp = now.unix_timestamp_nanos() as f64 / 1_000_000_000.0;
    Json(json!({ "status": "healthy", "timestamp": timestamp }))
}

pub async fn analyze(
    State(state): State<AppState>, payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("analyze", %request_id, url = %request.url);

    let report = state.analyzer.analyze_url(&request.url).instrument(span).await?;

    let mut response = Json(report).into_response();
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }
    Ok(response)
}
