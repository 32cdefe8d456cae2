//! Scoring criteria.
//!
//! Every criterion is available two ways: as a free function over the raw
//! inputs it needs, and as a [`Criterion`] implementation that reads those
//! inputs out of a [`QuestionResult`].

use eval_quiz_domain::{EngineEvaluation, PointTable, PositionContext, QuestionResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// A single, independent scoring signal.
pub trait Criterion: Send + Sync {
    type Outcome;

    /// Evaluate the criterion against a question result.
    fn evaluate(&self, result: &QuestionResult, points: &PointTable) -> Self::Outcome;

    /// Criterion name used in logs.
    fn name(&self) -> &'static str;
}

/// True iff guess and engine evaluation have the same strict sign.
///
/// A zero on either side never matches, including a correct guess of 0.0
/// for a position the engine also rates 0.0.
pub fn winning_side_match(guess: f64, top_evaluation: f64) -> bool {
    guess * top_evaluation > 0.0
}

/// Linear penalty on the absolute evaluation difference. Not clamped.
pub fn eval_points(guess: f64, actual: f64, points: &PointTable) -> f64 {
    -points.eval_penalty_per_pawn * (guess - actual).abs() + points.eval_base_points
}

/// Result of looking a guessed move up among the engine candidates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestMoveOutcome {
    /// The move is among the candidates, at any rank
    pub found: bool,
    pub multiplier: f64,
}

/// Look up the guessed move and compute the eval-points multiplier.
///
/// The first candidate with an identical move wins. An absent move gives the
/// table's minimum multiplier; a present one decays linearly with the gap
/// between its evaluation and the top evaluation, floored at the minimum.
pub fn best_move_outcome(
    guess: &str,
    engine_evaluation: &EngineEvaluation,
    points: &PointTable,
) -> BestMoveOutcome {
    match engine_evaluation.find(guess) {
        Some(matched) => {
            let gap = (matched.evaluation - engine_evaluation.top().evaluation).abs();
            let multiplier = (-points.best_move_decay_per_pawn * gap
                + points.best_move_max_multiplier)
                .max(points.best_move_min_multiplier);
            BestMoveOutcome {
                found: true,
                multiplier,
            }
        }
        None => BestMoveOutcome {
            found: false,
            multiplier: points.best_move_min_multiplier,
        },
    }
}

/// Whitespace tokens of the three context fields, exact and case-sensitive.
pub fn candidate_words(context: &PositionContext) -> HashSet<&str> {
    context
        .searchable_fields()
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect()
}

/// True iff any whitespace token of the guess equals a context token.
pub fn player_or_tournament_match(guess: &str, context: &PositionContext) -> bool {
    let words = candidate_words(context);
    guess.split_whitespace().any(|token| words.contains(token))
}

/// Winning-side criterion.
pub struct WinningSideCriterion;

impl Criterion for WinningSideCriterion {
    type Outcome = bool;

    fn evaluate(&self, result: &QuestionResult, _points: &PointTable) -> bool {
        let guess = result.answer.evaluation;
        let top = result.engine_evaluation.top().evaluation;
        let found = winning_side_match(guess, top);
        debug!(criterion = self.name(), guess, top, found, "Winning side evaluation");
        found
    }

    fn name(&self) -> &'static str {
        "winning_side"
    }
}

/// Evaluation-guess criterion.
pub struct EvalPointsCriterion;

impl Criterion for EvalPointsCriterion {
    type Outcome = f64;

    fn evaluate(&self, result: &QuestionResult, points: &PointTable) -> f64 {
        let guess = result.answer.evaluation;
        let actual = result.engine_evaluation.top().evaluation;
        let awarded = eval_points(guess, actual, points);
        debug!(criterion = self.name(), guess, actual, points = awarded, "Eval points evaluation");
        awarded
    }

    fn name(&self) -> &'static str {
        "eval_points"
    }
}

/// Best-move criterion.
pub struct BestMoveCriterion;

impl Criterion for BestMoveCriterion {
    type Outcome = BestMoveOutcome;

    fn evaluate(&self, result: &QuestionResult, points: &PointTable) -> BestMoveOutcome {
        let outcome = best_move_outcome(&result.answer.best_move, &result.engine_evaluation, points);
        debug!(
            criterion = self.name(),
            guess = %result.answer.best_move,
            found = outcome.found,
            multiplier = outcome.multiplier,
            "Best move evaluation"
        );
        outcome
    }

    fn name(&self) -> &'static str {
        "best_move"
    }
}

/// Player-or-tournament criterion.
pub struct PlayerOrTournamentCriterion;

impl Criterion for PlayerOrTournamentCriterion {
    type Outcome = bool;

    fn evaluate(&self, result: &QuestionResult, _points: &PointTable) -> bool {
        let found = player_or_tournament_match(&result.answer.player_or_tournament, &result.question);
        debug!(
            criterion = self.name(),
            guess = %result.answer.player_or_tournament,
            found,
            "Player or tournament evaluation"
        );
        found
    }

    fn name(&self) -> &'static str {
        "player_or_tournament"
    }
}
