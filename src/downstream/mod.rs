//! Downstream processing service.
//!
//! # Data Flow
//! ```text
//! VideoRequest
//!     → client.rs (re-encode JSON, POST to configured URL)
//!     → collect status + raw body (size-limited)
//!     → DownstreamResponse, relayed verbatim by the http layer
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound call per inbound request; no retries
//! - Connect timeout and total-call timeout are both configurable
//! - Body read failures are reported, never swallowed

pub mod client;

pub use client::{DownstreamClient, DownstreamError, DownstreamResponse};
