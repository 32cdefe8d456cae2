//! The guesser's answer and the question result the scorer consumes.

use crate::evaluation::EngineEvaluation;
use crate::question::PositionContext;
use crate::validation::ValidationResult;
use serde::{Deserialize, Serialize};

/// A guess about a position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Guessed evaluation in pawns, positive favours white
    pub evaluation: f64,
    /// Guessed best move, in the engine's move notation
    pub best_move: String,
    /// Free text naming a player or the tournament
    pub player_or_tournament: String,
}

impl Answer {
    pub fn new(
        evaluation: f64,
        best_move: impl Into<String>,
        player_or_tournament: impl Into<String>,
    ) -> Self {
        Self {
            evaluation,
            best_move: best_move.into(),
            player_or_tournament: player_or_tournament.into(),
        }
    }
}

/// Everything needed to score one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question: PositionContext,
    #[serde(alias = "stockfishEval")]
    pub engine_evaluation: EngineEvaluation,
    pub answer: Answer,
}

impl QuestionResult {
    pub fn new(
        question: PositionContext,
        engine_evaluation: EngineEvaluation,
        answer: Answer,
    ) -> Self {
        Self {
            question,
            engine_evaluation,
            answer,
        }
    }

    /// Check the inputs before scoring.
    ///
    /// Errors block scoring. Warnings and info entries point at inputs that
    /// score fine but probably not the way the submitter expects.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        if !self.answer.evaluation.is_finite() {
            result.add_error(
                "answer.evaluation",
                format!("Evaluation must be finite, got {}", self.answer.evaluation),
            );
        }

        result.merge(self.engine_evaluation.validate());

        if self
            .question
            .searchable_fields()
            .iter()
            .all(|field| field.trim().is_empty())
        {
            result.add_warning(
                "question",
                "Players and tournament are all blank; a player or tournament guess can never match",
            );
        }

        if self.engine_evaluation.find(&self.answer.best_move).is_none() {
            result.add_info(
                "answer.bestMove",
                format!(
                    "Move '{}' is not among the {} engine candidates",
                    self.answer.best_move,
                    self.engine_evaluation.len()
                ),
            );
        }

        result
    }
}
