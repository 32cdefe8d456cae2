//! Reading question results from JSON files
//!
//! A file holds either a single question result or an array of them.
//! Items are decoded one by one so that a malformed item does not hide
//! the others.

use anyhow::{Context, Result};
use eval_quiz_application::{ApplicationError, ApplicationResult};
use eval_quiz_domain::QuestionResult;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read every question result in a JSON file
pub fn read_question_results(path: &Path) -> Result<Vec<ApplicationResult<QuestionResult>>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let items = parse_question_results(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(path = %path.display(), items = items.len(), "Read question results");
    Ok(items)
}

/// Parse a JSON document holding one question result or an array of them.
///
/// Only a document that is not JSON at all fails as a whole.
pub fn parse_question_results(contents: &str) -> ApplicationResult<Vec<ApplicationResult<QuestionResult>>> {
    let document: Value = serde_json::from_str(contents)
        .map_err(|e| ApplicationError::InvalidInput(format!("Not a JSON document: {}", e)))?;

    let values = match document {
        Value::Array(values) => values,
        single => vec![single],
    };

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| {
                ApplicationError::InvalidInput(format!("item {}: {}", index, e))
            })
        })
        .collect())
}
