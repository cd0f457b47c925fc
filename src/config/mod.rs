//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file
//!     → loader.rs (parse & deserialize, apply GATEWAY_* env overrides)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → handed to HttpServer at construction
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so no file at all reproduces the stock gateway
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_with, ConfigError};
pub use schema::{
    CorsConfig, DownstreamConfig, GatewayConfig, ListenerConfig, LogFormat, LoggingConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
