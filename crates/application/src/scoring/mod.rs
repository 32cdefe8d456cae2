//! Scoring module - the four criteria and the scorer
//!
//! Each criterion is an independent, pure read of a question result.
//! The scorer combines them into a total.

mod criteria;
mod engine;

pub use criteria::*;
pub use engine::*;
