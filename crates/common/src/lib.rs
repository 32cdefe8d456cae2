//! Shared functionality for Eval Quiz binaries.
//!
//! - Layered configuration (files + environment)
//! - Tracing initialisation

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, TelemetryConfig};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
