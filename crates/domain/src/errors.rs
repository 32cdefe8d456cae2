//! Error types for the Eval Quiz domain.
//!
//! Scoring has no recoverable failure modes. The only errors are
//! precondition violations on the inputs handed over by the engine,
//! question and answer providers.

/// Precondition violations detected while building or scoring a question result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// The engine reported no candidate moves
    #[error("Engine evaluation must contain at least one variation")]
    EmptyEngineEvaluation,

    /// A numeric evaluation was NaN or infinite
    #[error("Non-finite evaluation in {field}: {value}")]
    NonFiniteEvaluation { field: String, value: f64 },

    /// The point table cannot produce a meaningful score
    #[error("Invalid point table: {0}")]
    InvalidPointTable(String),
}

impl ScoringError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyEngineEvaluation => "EMPTY_ENGINE_EVALUATION",
            Self::NonFiniteEvaluation { .. } => "NON_FINITE_EVALUATION",
            Self::InvalidPointTable(_) => "INVALID_POINT_TABLE",
        }
    }

    /// Shorthand for a non-finite value at `field`.
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteEvaluation {
            field: field.into(),
            value,
        }
    }
}

/// Result type for domain operations
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Fails with [`ScoringError::NonFiniteEvaluation`] unless `value` is finite.
pub fn ensure_finite(field: &str, value: f64) -> ScoringResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::non_finite(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ScoringError::EmptyEngineEvaluation.error_code(),
            "EMPTY_ENGINE_EVALUATION"
        );
        assert_eq!(
            ScoringError::non_finite("answer.evaluation", f64::NAN).error_code(),
            "NON_FINITE_EVALUATION"
        );
        assert_eq!(
            ScoringError::InvalidPointTable("bad".to_string()).error_code(),
            "INVALID_POINT_TABLE"
        );
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("x", 1.5), Ok(1.5));
        assert!(ensure_finite("x", f64::INFINITY).is_err());
        assert!(ensure_finite("x", f64::NEG_INFINITY).is_err());
        assert!(ensure_finite("x", f64::NAN).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = ScoringError::non_finite("engineEvaluation[2].evaluation", f64::INFINITY);
        assert_eq!(
            err.to_string(),
            "Non-finite evaluation in engineEvaluation[2].evaluation: inf"
        );
    }
}
