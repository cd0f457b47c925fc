//! Video processing gateway.
//!
//! Accepts `POST /videos` with a JSON `{"url": ...}` body, forwards it to a
//! single downstream processing service and relays that service's status and
//! body back to the caller. `GET /` reports liveness.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ http::server ──▶ http::handlers ──▶ downstream::client ──▶ Processing
//!                (CORS, ids,       (parse VideoRequest)   (one POST, no retry)     service
//!                 tracing)
//!     Client ◀── http::response ◀──────────────────────── status + raw body ◀──────┘
//! ```

pub mod config;
pub mod downstream;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod video;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use video::VideoRequest;
