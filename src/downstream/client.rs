//! HTTP client for the processing service.

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header, uri::InvalidUri, HeaderValue, Method, Request, StatusCode, Uri};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::{DownstreamConfig, TimeoutConfig};
use crate::http::request::X_REQUEST_ID;
use crate::video::VideoRequest;

/// Failures talking to the processing service.
#[derive(Debug, thiserror::Error)]
pub enum DownstreamError {
    #[error("invalid downstream uri '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: InvalidUri,
    },

    #[error("failed to encode video request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to build downstream request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("downstream unreachable: {0}")]
    Unreachable(#[from] hyper_util::client::legacy::Error),

    #[error("downstream did not answer within {0:?}")]
    Timeout(Duration),

    #[error("failed to read downstream response body: {0}")]
    ReadBody(#[source] axum::Error),
}

/// Status and raw body returned by the processing service.
#[derive(Debug, Clone)]
pub struct DownstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Client bound to a single downstream endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct DownstreamClient {
    client: Client<HttpConnector, Body>,
    uri: Uri,
    timeout: Duration,
    max_response_bytes: usize,
}

impl DownstreamClient {
    /// Build a client for `config.url`.
    pub fn new(config: &DownstreamConfig, timeouts: &TimeoutConfig) -> Result<Self, DownstreamError> {
        let uri: Uri = config.url.parse().map_err(|source| DownstreamError::InvalidUri {
            uri: config.url.clone(),
            source,
        })?;

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(timeouts.connect_secs)));
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self {
            client,
            uri,
            timeout: Duration::from_secs(timeouts.downstream_secs),
            max_response_bytes: config.max_response_bytes,
        })
    }

    /// The endpoint every request is sent to.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// POST `video` to the processing service and collect its answer.
    ///
    /// `request_id` is forwarded as `x-request-id` when present. The timeout
    /// covers the whole exchange, including reading the body.
    pub async fn process_video(
        &self,
        video: &VideoRequest,
        request_id: Option<&HeaderValue>,
    ) -> Result<DownstreamResponse, DownstreamError> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(self.uri.clone())
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(id) = request_id {
            builder = builder.header(X_REQUEST_ID, id.clone());
        }
        let request = builder.body(Body::from(video.to_vec()?))?;

        let exchange = async {
            let response = self.client.request(request).await?;
            let status = response.status();
            let body = axum::body::to_bytes(Body::new(response.into_body()), self.max_response_bytes)
                .await
                .map_err(DownstreamError::ReadBody)?;
            Ok::<_, DownstreamError>(DownstreamResponse { status, body })
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| DownstreamError::Timeout(self.timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparseable_uri() {
        let config = DownstreamConfig {
            url: "http://bad host/process_video".into(),
            ..Default::default()
        };
        let err = DownstreamClient::new(&config, &TimeoutConfig::default()).err();
        assert!(matches!(err, Some(DownstreamError::InvalidUri { .. })));
    }

    #[tokio::test]
    async fn test_default_targets_process_video() {
        let client =
            DownstreamClient::new(&DownstreamConfig::default(), &TimeoutConfig::default()).unwrap();
        assert_eq!(client.uri().host(), Some("localhost"));
        assert_eq!(client.uri().port_u16(), Some(8000));
        assert_eq!(client.uri().path(), "/process_video");
    }
}
