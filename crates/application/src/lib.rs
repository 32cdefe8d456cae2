//! Application layer for Eval Quiz
//!
//! Hosts the scorer that turns a question result into a score breakdown.
//!
//! ## Modules
//!
//! - `scoring` - the four scoring criteria and the scorer combining them

pub mod scoring;

pub use scoring::{
    BestMoveOutcome, Criterion, Scorer, ScorerBuilder, ScorerConfig,
};

use eval_quiz_domain::ScoringError;
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone)]
pub enum ApplicationError {
    /// Input could not be read or interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input was read but failed validation
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A scoring precondition was violated
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl ApplicationError {
    /// Get error code for reports
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::InvalidInput(_) => "INVALID_INPUT",
            ApplicationError::ValidationFailed(_) => "VALIDATION_FAILED",
            ApplicationError::Scoring(e) => e.error_code(),
        }
    }

    /// Process exit code for command-line front ends
    pub fn exit_code(&self) -> i32 {
        match self {
            ApplicationError::InvalidInput(_) | ApplicationError::ValidationFailed(_) => 2,
            ApplicationError::Scoring(_) => 1,
        }
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApplicationError::InvalidInput("test".to_string()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            ApplicationError::from(ScoringError::EmptyEngineEvaluation).error_code(),
            "EMPTY_ENGINE_EVALUATION"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ApplicationError::ValidationFailed("x".to_string()).exit_code(), 2);
        assert_eq!(
            ApplicationError::from(ScoringError::non_finite("answer.evaluation", f64::NAN))
                .exit_code(),
            1
        );
    }

    #[test]
    fn test_scoring_error_is_transparent() {
        let err = ApplicationError::from(ScoringError::EmptyEngineEvaluation);
        assert_eq!(
            err.to_string(),
            "Engine evaluation must contain at least one variation"
        );
    }
}
