//! Response construction.
//!
//! # Responsibilities
//! - Relay the downstream status and body unchanged, as `application/json`
//! - Map gateway failures to status codes with a JSON `{"error": ...}` body

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::downstream::{DownstreamError, DownstreamResponse};

/// Message returned when the processing service cannot be reached.
pub const BACKEND_UNREACHABLE: &str = "Failed to reach Python backend";

/// Message returned when the processing service's body cannot be read.
pub const BACKEND_READ_FAILED: &str = "Failed to read Python backend response";

/// Errors surfaced to the caller of `/videos`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Inbound body is not a valid video request.
    #[error("{0}")]
    MalformedBody(String),

    #[error("{}", BACKEND_UNREACHABLE)]
    BackendUnreachable,

    #[error("{}", BACKEND_READ_FAILED)]
    BackendReadFailed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::BackendUnreachable => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BackendReadFailed => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedBody(e.to_string())
    }
}

impl From<DownstreamError> for ApiError {
    fn from(e: DownstreamError) -> Self {
        match e {
            DownstreamError::ReadBody(_) => ApiError::BackendReadFailed,
            _ => ApiError::BackendUnreachable,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Copy a downstream answer back to the caller byte for byte.
pub fn relay(downstream: DownstreamResponse) -> Response {
    let mut response = Response::new(Body::from(downstream.body));
    *response.status_mut() = downstream.status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;

    async fn body_of(response: Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap()
    }

    #[tokio::test]
    async fn test_unreachable_body() {
        let response = ApiError::BackendUnreachable.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            Bytes::from_static(br#"{"error":"Failed to reach Python backend"}"#)
        );
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[test]
    fn test_downstream_error_mapping() {
        let timeout = DownstreamError::Timeout(std::time::Duration::from_secs(1));
        assert!(matches!(ApiError::from(timeout), ApiError::BackendUnreachable));

        let read = DownstreamError::ReadBody(axum::Error::new("connection reset"));
        assert!(matches!(ApiError::from(read), ApiError::BackendReadFailed));
    }

    #[tokio::test]
    async fn test_relay_is_verbatim() {
        let raw = Bytes::from_static(b"{ \"job_id\" : \"abc123\" }");
        let response = relay(DownstreamResponse {
            status: StatusCode::ACCEPTED,
            body: raw.clone(),
        });

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_of(response).await, raw);
    }
}
