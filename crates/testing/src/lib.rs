//! Testing utilities for Eval Quiz
//!
//! This crate provides:
//! - Fixtures for known positions, answers and their expected scores
//! - A fluent builder for question results
//! - Proptest strategies for property-based tests
//!
//! # Examples
//!
//! ```
//! use eval_quiz_testing::builders::QuestionResultBuilder;
//!
//! let result = QuestionResultBuilder::new()
//!     .with_top("e4", 1.0)
//!     .with_line("d4", 0.8)
//!     .with_guess_eval(0.9)
//!     .with_guess_move("d4")
//!     .build();
//! assert_eq!(result.engine_evaluation.len(), 2);
//! ```

pub mod builders;
pub mod fixtures;
pub mod strategies;

pub use builders::*;
pub use fixtures::*;
pub use strategies::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
