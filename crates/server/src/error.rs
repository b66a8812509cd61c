//! Mapping of analysis failures to HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use seolens_core::SeoLensError;
use serde_json::json;

/// An error answered with `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<SeoLensError> for ApiError {
    fn from(err: SeoLensError) -> Self {
        let status = match &err {
            SeoLensError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            SeoLensError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            SeoLensError::HttpStatus { .. } | SeoLensError::Connection(_) | SeoLensError::HttpError(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), error = %self.message, "request failed");
        } else {
            tracing::warn!(status = self.status.as_u16(), error = %self.message, "request rejected");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (SeoLensError::InvalidUrl("x".into()), StatusCode::BAD_REQUEST),
            (SeoLensError::Timeout { timeout: 15 }, StatusCode::GATEWAY_TIMEOUT),
            (SeoLensError::HttpStatus { status: 404 }, StatusCode::BAD_GATEWAY),
            (SeoLensError::Connection("refused".into()), StatusCode::BAD_GATEWAY),
            (SeoLensError::HtmlParseError("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_message_keeps_upstream_status() {
        let err = ApiError::from(SeoLensError::HttpStatus { status: 503 });
        assert_eq!(err.message, "Failed to load page: HTTP 503");
    }
}
