//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, CORS, timeout, tracing)
//!     → request.rs (assign / propagate x-request-id)
//!     → handlers.rs (health, submit_video)
//!     → [downstream client posts to processing service]
//!     → response.rs (relay downstream answer or render ApiError)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, MakeRequestUuid, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
