//! Validation result types.
//!
//! Used to report problems in a question result before it is scored.
//! Each issue carries the JSON path of the offending field.

use serde::{Deserialize, Serialize};

/// Outcome of validating a question result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the input can be scored (no errors)
    pub valid: bool,

    /// Issues that block scoring
    pub errors: Vec<ValidationIssue>,

    /// Warnings and informational notes
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationIssue::error(path, message));
    }

    pub fn add_warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue::warning(path, message));
    }

    /// Info entries live alongside warnings.
    pub fn add_info(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue::info(path, message));
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.valid = self.errors.is_empty();
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// All issues, most severe first.
    pub fn issues(&self) -> Vec<&ValidationIssue> {
        let mut issues: Vec<&ValidationIssue> =
            self.errors.iter().chain(self.warnings.iter()).collect();
        issues.sort_by(|a, b| b.severity.cmp(&a.severity));
        issues
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// A single validation problem
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    /// JSON path of the field, e.g. "answer.evaluation"
    pub path: String,
    pub message: String,
    pub severity: IssueSeverity,
}

impl ValidationIssue {
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(path, message, IssueSeverity::Error)
    }

    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(path, message, IssueSeverity::Warning)
    }

    pub fn info(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(path, message, IssueSeverity::Info)
    }

    fn with_severity(
        path: impl Into<String>,
        message: impl Into<String>,
        severity: IssueSeverity,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Severity of a validation issue, ordered Info < Warning < Error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Info,
    Warning,
    Error,
}

impl IssueSeverity {
    /// Whether this severity prevents scoring
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_error_invalidates() {
        let mut result = ValidationResult::success();
        assert!(result.valid);

        result.add_error("answer.evaluation", "Evaluation must be finite");
        assert!(!result.valid);
        assert!(result.has_errors());
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut result = ValidationResult::success();
        result.add_warning("engineEvaluation", "duplicate move");
        result.add_info("answer.bestMove", "not a candidate");

        assert!(result.valid);
        assert_eq!(result.total_issues(), 2);
    }

    #[test]
    fn test_merge() {
        let mut first = ValidationResult::success();
        first.add_warning("question", "blank");

        let mut second = ValidationResult::success();
        second.add_error("answer.evaluation", "NaN");

        first.merge(second);
        assert!(!first.valid);
        assert_eq!(first.total_issues(), 2);
    }

    #[test]
    fn test_issues_sorted_by_severity() {
        let mut result = ValidationResult::success();
        result.add_info("a", "info");
        result.add_warning("b", "warning");
        result.add_error("c", "error");

        let severities: Vec<IssueSeverity> = result.issues().iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![IssueSeverity::Error, IssueSeverity::Warning, IssueSeverity::Info]
        );
    }

    #[test]
    fn test_severity_blocking() {
        assert!(IssueSeverity::Error.is_blocking());
        assert!(!IssueSeverity::Warning.is_blocking());
        assert!(!IssueSeverity::Info.is_blocking());
    }
}
