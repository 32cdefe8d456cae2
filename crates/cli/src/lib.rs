//! Eval Quiz CLI Library
//!
//! Command implementations, user preferences, input decoding and output
//! formatting for the `eval-quiz` binary.

pub mod commands;
pub mod config;
pub mod input;
pub mod output;

pub use config::Config;
pub use output::{JsonFormatter, OutputFormat, PlainFormatter, Render, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
