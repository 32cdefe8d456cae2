//! Fluent builder for question results.

use eval_quiz_domain::{Answer, PositionContext, QuestionResult, Variation};

use crate::fixtures::{create_test_answer, create_test_context};

/// Builder for creating QuestionResult test instances
#[derive(Clone)]
pub struct QuestionResultBuilder {
    context: PositionContext,
    variations: Vec<Variation>,
    answer: Answer,
}

impl QuestionResultBuilder {
    pub fn new() -> Self {
        Self {
            context: create_test_context(),
            variations: vec![Variation::new("e2e4", 0.35)],
            answer: create_test_answer(),
        }
    }

    pub fn with_players(mut self, white: impl Into<String>, black: impl Into<String>) -> Self {
        self.context.players.white = white.into();
        self.context.players.black = black.into();
        self
    }

    pub fn with_tournament(mut self, tournament: impl Into<String>) -> Self {
        self.context.tournament = tournament.into();
        self
    }

    pub fn with_context(mut self, context: PositionContext) -> Self {
        self.context = context;
        self
    }

    /// Replace all engine lines with a single top line.
    pub fn with_top(mut self, mv: impl Into<String>, evaluation: f64) -> Self {
        self.variations = vec![Variation::new(mv, evaluation)];
        self
    }

    /// Append a lower-ranked engine line.
    pub fn with_line(mut self, mv: impl Into<String>, evaluation: f64) -> Self {
        self.variations.push(Variation::new(mv, evaluation));
        self
    }

    pub fn with_guess_eval(mut self, evaluation: f64) -> Self {
        self.answer.evaluation = evaluation;
        self
    }

    pub fn with_guess_move(mut self, mv: impl Into<String>) -> Self {
        self.answer.best_move = mv.into();
        self
    }

    pub fn with_guess_name(mut self, text: impl Into<String>) -> Self {
        self.answer.player_or_tournament = text.into();
        self
    }

    /// Panics if no engine line is left; use [`try_build`](Self::try_build)
    /// to exercise that precondition.
    pub fn build(self) -> QuestionResult {
        self.try_build()
            .expect("builder needs at least one finite engine line")
    }

    pub fn try_build(self) -> eval_quiz_domain::ScoringResult<QuestionResult> {
        let engine_evaluation = eval_quiz_domain::EngineEvaluation::new(self.variations)?;
        Ok(QuestionResult::new(self.context, engine_evaluation, self.answer))
    }
}

impl Default for QuestionResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_lines_keep_order() {
        let result = QuestionResultBuilder::new()
            .with_top("e4", 1.0)
            .with_line("d4", 0.5)
            .with_line("c4", 0.1)
            .build();

        let moves: Vec<&str> = result
            .engine_evaluation
            .variations()
            .iter()
            .map(|v| v.mv.as_str())
            .collect();
        assert_eq!(moves, vec!["e4", "d4", "c4"]);
    }

    #[test]
    fn test_builder_rejects_non_finite_line() {
        let result = QuestionResultBuilder::new()
            .with_top("e4", f64::NAN)
            .try_build();
        assert!(result.is_err());
    }
}
