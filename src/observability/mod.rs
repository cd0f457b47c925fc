//! Observability subsystem.
//!
//! Structured logging through `tracing`. Every event emitted while handling a
//! request carries its `request_id`, which is also echoed to the caller and
//! forwarded to the processing service.

pub mod logging;
