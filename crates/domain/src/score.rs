//! Score output and the point table that shapes it.
//!
//! The default table reproduces the quiz's published point rules:
//!
//! 1. 20 points for guessing the winning side.
//! 2. `-16 * |guess - actual| + 50` points for the evaluation guess.
//!
//!    | eval difference | points |
//!    |-----------------|--------|
//!    | 0               | 50     |
//!    | 0.5             | 42     |
//!    | 1               | 34     |
//!    | 2               | 18     |
//!    | 3               | 2      |
//!    | 4               | -14    |
//!    | 10              | -110   |
//!
//! 3. Guessing one of the engine's candidate moves multiplies the evaluation
//!    points by `max(-0.75 * |candidate_eval - best_eval| + 3, 1)`
//!    (x3.0 at 0, x2.25 at 1, x1.5 at 2, x1.0 from 8/3 on).
//! 4. 10 points for naming a player or the tournament.

use crate::errors::{ScoringError, ScoringResult};
use serde::{Deserialize, Serialize};

/// Constants of the scoring curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointTable {
    pub winning_side_points: f64,
    pub eval_base_points: f64,
    pub eval_penalty_per_pawn: f64,
    pub best_move_max_multiplier: f64,
    pub best_move_decay_per_pawn: f64,
    pub best_move_min_multiplier: f64,
    pub player_or_tournament_points: f64,
}

impl Default for PointTable {
    fn default() -> Self {
        Self {
            winning_side_points: 20.0,
            eval_base_points: 50.0,
            eval_penalty_per_pawn: 16.0,
            best_move_max_multiplier: 3.0,
            best_move_decay_per_pawn: 0.75,
            best_move_min_multiplier: 1.0,
            player_or_tournament_points: 10.0,
        }
    }
}

impl PointTable {
    /// Reject tables that cannot produce a finite, well-ordered score.
    pub fn validate(&self) -> ScoringResult<()> {
        let fields = [
            ("winning_side_points", self.winning_side_points),
            ("eval_base_points", self.eval_base_points),
            ("eval_penalty_per_pawn", self.eval_penalty_per_pawn),
            ("best_move_max_multiplier", self.best_move_max_multiplier),
            ("best_move_decay_per_pawn", self.best_move_decay_per_pawn),
            ("best_move_min_multiplier", self.best_move_min_multiplier),
            ("player_or_tournament_points", self.player_or_tournament_points),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ScoringError::InvalidPointTable(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.best_move_min_multiplier > self.best_move_max_multiplier {
            return Err(ScoringError::InvalidPointTable(format!(
                "best_move_min_multiplier ({}) exceeds best_move_max_multiplier ({})",
                self.best_move_min_multiplier, self.best_move_max_multiplier
            )));
        }

        if self.eval_penalty_per_pawn < 0.0 || self.best_move_decay_per_pawn < 0.0 {
            return Err(ScoringError::InvalidPointTable(
                "penalty and decay rates must not be negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Evaluation gap at which the best-move multiplier reaches its floor.
    pub fn multiplier_floor_gap(&self) -> f64 {
        (self.best_move_max_multiplier - self.best_move_min_multiplier)
            / self.best_move_decay_per_pawn
    }
}

/// The scorer's output for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Guess and engine agree on the winning side
    pub found_winning_side: bool,
    /// Points for the evaluation guess, possibly negative
    pub eval_points: f64,
    /// The guessed move is among the engine's candidates
    pub found_best_move: bool,
    /// Factor applied to `eval_points`, never below the table's floor
    pub best_move_multiplier: f64,
    /// A guess token names a player or the tournament
    pub found_player_or_tournament: bool,
    pub total: f64,
}

impl ScoreBreakdown {
    /// Evaluation points after the best-move multiplier.
    pub fn weighted_eval_points(&self) -> f64 {
        self.eval_points * self.best_move_multiplier
    }
}
