//! Scorer - combines the four criteria into a score breakdown
//!
//! The scorer holds nothing but its configuration. Scoring is a pure
//! function of the question result, so one scorer can be shared across
//! threads and called concurrently without coordination.

use crate::scoring::criteria::{
    best_move_outcome, eval_points, player_or_tournament_match, winning_side_match,
    BestMoveCriterion, BestMoveOutcome, Criterion, EvalPointsCriterion,
    PlayerOrTournamentCriterion, WinningSideCriterion,
};
use crate::{ApplicationError, ApplicationResult};
use eval_quiz_domain::errors::ensure_finite;
use eval_quiz_domain::{
    EngineEvaluation, PointTable, PositionContext, QuestionResult, ScoreBreakdown,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Scorer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Constants of the scoring curve
    #[serde(default)]
    pub points: PointTable,
    /// Log every criterion at info level instead of debug
    #[serde(default)]
    pub detailed_logging: bool,
}

/// Scores question results
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScorerConfig,
}

impl Scorer {
    /// Create a scorer, rejecting an unusable point table
    pub fn new(config: ScorerConfig) -> ApplicationResult<Self> {
        config.points.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn points(&self) -> &PointTable {
        &self.config.points
    }

    /// Score a question result
    ///
    /// Fails only when the answer's evaluation is not a finite number; the
    /// engine evaluation is already guaranteed non-empty and finite.
    #[instrument(skip(self, result), fields(top_move = %result.engine_evaluation.top().mv))]
    pub fn score(&self, result: &QuestionResult) -> ApplicationResult<ScoreBreakdown> {
        ensure_finite("answer.evaluation", result.answer.evaluation)?;

        let points = &self.config.points;
        let found_winning_side = WinningSideCriterion.evaluate(result, points);
        let eval_points = EvalPointsCriterion.evaluate(result, points);
        let best_move = BestMoveCriterion.evaluate(result, points);
        let found_player_or_tournament = PlayerOrTournamentCriterion.evaluate(result, points);

        let total = self.total(
            found_winning_side,
            eval_points,
            best_move.multiplier,
            found_player_or_tournament,
        );

        let breakdown = ScoreBreakdown {
            found_winning_side,
            eval_points,
            found_best_move: best_move.found,
            best_move_multiplier: best_move.multiplier,
            found_player_or_tournament,
            total,
        };

        if self.config.detailed_logging {
            info!(
                found_winning_side,
                eval_points,
                found_best_move = breakdown.found_best_move,
                best_move_multiplier = breakdown.best_move_multiplier,
                weighted_eval_points = breakdown.weighted_eval_points(),
                found_player_or_tournament,
                total,
                "Scored question result"
            );
        } else {
            debug!(total, "Scored question result");
        }

        Ok(breakdown)
    }

    /// Score each question result independently
    #[instrument(skip(self, results), fields(count = results.len()))]
    pub fn score_all(&self, results: &[QuestionResult]) -> Vec<ApplicationResult<ScoreBreakdown>> {
        let scored: Vec<ApplicationResult<ScoreBreakdown>> =
            results.iter().map(|result| self.score(result)).collect();

        let failures = scored.iter().filter(|r| r.is_err()).count();
        if failures > 0 {
            warn!(failures, "Some question results could not be scored");
        }
        info!(scored = scored.len() - failures, "Completed scoring");

        scored
    }

    /// Winning-side match between a guessed and the top evaluation
    pub fn found_winning_side(&self, guess: f64, top_evaluation: f64) -> bool {
        winning_side_match(guess, top_evaluation)
    }

    /// Points for an evaluation guess
    pub fn eval_points(&self, guess: f64, actual: f64) -> f64 {
        eval_points(guess, actual, &self.config.points)
    }

    /// Best-move match flag and multiplier
    pub fn best_move(&self, guess: &str, engine_evaluation: &EngineEvaluation) -> BestMoveOutcome {
        best_move_outcome(guess, engine_evaluation, &self.config.points)
    }

    /// Player or tournament match
    pub fn found_player_or_tournament(&self, guess: &str, context: &PositionContext) -> bool {
        player_or_tournament_match(guess, context)
    }

    /// Combine the four signals
    pub fn total(
        &self,
        found_winning_side: bool,
        eval_points: f64,
        best_move_multiplier: f64,
        found_player_or_tournament: bool,
    ) -> f64 {
        let points = &self.config.points;
        let winning_side = if found_winning_side {
            points.winning_side_points
        } else {
            0.0
        };
        let player_or_tournament = if found_player_or_tournament {
            points.player_or_tournament_points
        } else {
            0.0
        };
        winning_side + eval_points * best_move_multiplier + player_or_tournament
    }
}

/// Builder for Scorer
pub struct ScorerBuilder {
    config: ScorerConfig,
}

impl ScorerBuilder {
    pub fn new() -> Self {
        Self {
            config: ScorerConfig::default(),
        }
    }

    pub fn config(mut self, config: ScorerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn points(mut self, points: PointTable) -> Self {
        self.config.points = points;
        self
    }

    pub fn winning_side_points(mut self, value: f64) -> Self {
        self.config.points.winning_side_points = value;
        self
    }

    pub fn eval_curve(mut self, base_points: f64, penalty_per_pawn: f64) -> Self {
        self.config.points.eval_base_points = base_points;
        self.config.points.eval_penalty_per_pawn = penalty_per_pawn;
        self
    }

    pub fn best_move_multiplier(mut self, max: f64, decay_per_pawn: f64, min: f64) -> Self {
        self.config.points.best_move_max_multiplier = max;
        self.config.points.best_move_decay_per_pawn = decay_per_pawn;
        self.config.points.best_move_min_multiplier = min;
        self
    }

    pub fn player_or_tournament_points(mut self, value: f64) -> Self {
        self.config.points.player_or_tournament_points = value;
        self
    }

    pub fn detailed_logging(mut self, enabled: bool) -> Self {
        self.config.detailed_logging = enabled;
        self
    }

    pub fn build(self) -> Result<Scorer, ApplicationError> {
        Scorer::new(self.config)
    }
}

impl Default for ScorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
