//! Route handlers.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Response,
    Json,
};
use serde::Serialize;

use crate::http::request::{request_id, X_REQUEST_ID};
use crate::http::response::{relay, ApiError};
use crate::http::server::AppState;
use crate::video::VideoRequest;

/// Status message reported by `GET /`.
pub const RUNNING_MESSAGE: &str = "Video gateway running";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: RUNNING_MESSAGE,
    })
}

/// `POST /videos`
///
/// Parses the body as a [`VideoRequest`], forwards it to the processing
/// service and relays whatever comes back.
pub async fn submit_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let start_time = Instant::now();
    let request_id = request_id(&headers);

    let video = VideoRequest::from_slice(&body).map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Rejecting malformed video request");
        ApiError::from(e)
    })?;

    tracing::debug!(
        request_id = %request_id,
        url = %video.url,
        downstream = %state.downstream.uri(),
        "Forwarding video request"
    );

    match state
        .downstream
        .process_video(&video, headers.get(X_REQUEST_ID))
        .await
    {
        Ok(answer) => {
            tracing::info!(
                request_id = %request_id,
                status = answer.status.as_u16(),
                bytes = answer.body.len(),
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Downstream answered"
            );
            Ok(relay(answer))
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Downstream request failed"
            );
            Err(e.into())
        }
    }
}
