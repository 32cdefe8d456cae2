//! Output formatting for CLI

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

mod formatters;
mod report;
mod table;

pub use formatters::{JsonFormatter, PlainFormatter};
pub use report::{
    ConfigReport, CurvePoint, ItemError, PointsReport, ScoreReport, ScoredItem, ValidatedItem,
    ValidationReport,
};
pub use table::TableFormatter;

/// Output format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "plain" => Ok(Self::Plain),
            _ => anyhow::bail!("Invalid output format: {}. Use json, table, or plain", s),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// A command result that can be printed in every output format.
///
/// JSON comes for free from `Serialize`; table and plain text are
/// written per report.
pub trait Render: Serialize {
    fn render_table(&self) -> Result<String>;

    fn render_plain(&self) -> Result<String>;

    fn render_json(&self) -> Result<String> {
        JsonFormatter::format(self)
    }

    /// Render using the specified format
    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Table => self.render_table(),
            OutputFormat::Plain => self.render_plain(),
        }
    }
}

/// Color helpers
pub mod colors {
    use colored::*;
    use eval_quiz_domain::IssueSeverity;

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn info(s: &str) -> ColoredString {
        s.blue()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    pub fn bold(s: &str) -> ColoredString {
        s.bold()
    }

    /// "yes" in green or "no" dimmed
    pub fn flag(value: bool) -> ColoredString {
        if value {
            success("yes")
        } else {
            dim("no")
        }
    }

    pub fn severity(severity: IssueSeverity) -> ColoredString {
        let label = severity.to_string();
        match severity {
            IssueSeverity::Error => error(&label).bold(),
            IssueSeverity::Warning => warning(&label),
            IssueSeverity::Info => info(&label),
        }
    }
}
