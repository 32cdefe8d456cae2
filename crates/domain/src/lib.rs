//! Eval Quiz Domain Types
//!
//! Data model for scoring a guess about a chess position against a
//! reference engine's evaluation of that position.
//!
//! ## Modules
//!
//! - **question**: players, tournament and side-to-move context
//! - **evaluation**: the engine's ranked candidate moves
//! - **answer**: the guesser's submission and the combined question result
//! - **score**: the score breakdown and the point table behind it
//! - **errors**: precondition violations
//! - **validation**: validation result types
//!
//! ## Usage
//!
//! ```rust
//! use eval_quiz_domain::{Answer, EngineEvaluation, PositionContext, QuestionResult, Variation};
//!
//! let engine = EngineEvaluation::new(vec![
//!     Variation::new("e2e4", 0.3),
//!     Variation::new("d2d4", 0.25),
//! ])
//! .unwrap();
//!
//! let result = QuestionResult::new(
//!     PositionContext::new("Magnus Carlsen", "Ding Liren", "Norway Chess"),
//!     engine,
//!     Answer::new(0.5, "d2d4", "Carlsen"),
//! );
//! assert!(result.validate().valid);
//! ```

#![warn(clippy::all)]

pub mod answer;
pub mod errors;
pub mod evaluation;
pub mod question;
pub mod score;
pub mod validation;

pub use answer::{Answer, QuestionResult};
pub use errors::{ScoringError, ScoringResult};
pub use evaluation::{EngineEvaluation, EngineLine, Variation};
pub use question::{Players, PositionContext, Side};
pub use score::{PointTable, ScoreBreakdown};
pub use validation::{IssueSeverity, ValidationIssue, ValidationResult};
