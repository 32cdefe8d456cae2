//! Engine evaluation types.
//!
//! An [`EngineEvaluation`] is the reference engine's ranked list of candidate
//! moves for a position, best first. Index 0 is authoritative for both "the
//! position's evaluation" and "the engine's top move". Evaluations are in
//! pawn units, positive favours white.

use crate::errors::{ensure_finite, ScoringError, ScoringResult};
use crate::question::Side;
use crate::validation::ValidationResult;
use serde::{Deserialize, Serialize};

/// One candidate move with its evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    /// Move identifier, compared by exact text equality
    #[serde(rename = "move")]
    pub mv: String,
    /// White-positive evaluation in pawns
    pub evaluation: f64,
}

impl Variation {
    pub fn new(mv: impl Into<String>, evaluation: f64) -> Self {
        Self {
            mv: mv.into(),
            evaluation,
        }
    }

    /// Convert an engine score given in centipawns from the side to move's
    /// point of view into a white-positive pawn evaluation.
    pub fn from_centipawns(mv: impl Into<String>, centipawns: i32, side_to_move: Side) -> Self {
        Self {
            mv: mv.into(),
            evaluation: side_to_move.perspective() * f64::from(centipawns) / 100.0,
        }
    }
}

/// A single MultiPV report line as an engine emits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineLine {
    /// 1-based MultiPV rank
    pub rank: u16,
    /// Score in centipawns from the side to move's point of view
    pub centipawns: i32,
    /// First move of the principal variation
    pub uci_move: String,
}

/// Ranked, non-empty list of engine candidate moves.
///
/// The only way to obtain one is through [`EngineEvaluation::new`] (or
/// deserialization, which goes through it), so [`EngineEvaluation::top`]
/// never has to deal with a missing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Variation>", into = "Vec<Variation>")]
pub struct EngineEvaluation {
    variations: Vec<Variation>,
}

impl EngineEvaluation {
    /// Build an evaluation from variations ordered best to worst.
    ///
    /// Fails on an empty list or on any non-finite evaluation.
    pub fn new(variations: Vec<Variation>) -> ScoringResult<Self> {
        if variations.is_empty() {
            return Err(ScoringError::EmptyEngineEvaluation);
        }
        for (i, variation) in variations.iter().enumerate() {
            ensure_finite(
                &format!("engineEvaluation[{}].evaluation", i),
                variation.evaluation,
            )?;
        }
        Ok(Self { variations })
    }

    /// Build an evaluation from raw MultiPV lines.
    ///
    /// Lines are ordered by rank; gaps in the ranks are allowed.
    pub fn from_engine_lines(
        mut lines: Vec<EngineLine>,
        side_to_move: Side,
    ) -> ScoringResult<Self> {
        lines.sort_by_key(|line| line.rank);
        let variations = lines
            .into_iter()
            .map(|line| Variation::from_centipawns(line.uci_move, line.centipawns, side_to_move))
            .collect();
        Self::new(variations)
    }

    /// The engine's top choice.
    pub fn top(&self) -> &Variation {
        &self.variations[0]
    }

    /// All variations, best first.
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    pub fn len(&self) -> usize {
        self.variations.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// First variation whose move equals `mv` exactly, scanning in rank order.
    pub fn find(&self, mv: &str) -> Option<&Variation> {
        self.variations.iter().find(|variation| variation.mv == mv)
    }

    /// Move identifiers that occur more than once, in first-seen order.
    pub fn duplicate_moves(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for variation in &self.variations {
            if !seen.insert(variation.mv.as_str()) && !duplicates.contains(&variation.mv.as_str()) {
                duplicates.push(variation.mv.as_str());
            }
        }
        duplicates
    }

    /// Non-blocking findings about the list itself.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        for mv in self.duplicate_moves() {
            result.add_warning(
                "engineEvaluation",
                format!("Move '{}' is listed more than once; the best-ranked entry is used", mv),
            );
        }

        if self.top().evaluation == 0.0 {
            result.add_info(
                "engineEvaluation[0].evaluation",
                "Engine evaluation is exactly 0.0; no guess earns winning-side points",
            );
        }

        result
    }
}

impl TryFrom<Vec<Variation>> for EngineEvaluation {
    type Error = ScoringError;

    fn try_from(variations: Vec<Variation>) -> Result<Self, Self::Error> {
        Self::new(variations)
    }
}

impl From<EngineEvaluation> for Vec<Variation> {
    fn from(evaluation: EngineEvaluation) -> Self {
        evaluation.variations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EngineEvaluation {
        EngineEvaluation::new(vec![
            Variation::new("e2e4", 0.35),
            Variation::new("d2d4", 0.30),
            Variation::new("g1f3", 0.22),
        ])
        .unwrap()
    }

    #[test]
    fn test_validate_flags_duplicates_and_drawn_top() {
        assert_eq!(sample().validate().total_issues(), 0);

        let evaluation = EngineEvaluation::new(vec![
            Variation::new("e2e4", 0.0),
            Variation::new("d2d4", -0.1),
            Variation::new("e2e4", -0.3),
        ])
        .unwrap();
        let result = evaluation.validate();

        assert!(result.valid);
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.warnings[0].path, "engineEvaluation");
        assert_eq!(result.warnings[1].path, "engineEvaluation[0].evaluation");
    }

    #[test]
    fn test_top_is_first() {
        let evaluation = sample();
        assert_eq!(evaluation.top().mv, "e2e4");
        assert_eq!(evaluation.top().evaluation, 0.35);
        assert_eq!(evaluation.len(), 3);
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(
            EngineEvaluation::new(vec![]),
            Err(ScoringError::EmptyEngineEvaluation)
        );
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let err = EngineEvaluation::new(vec![
            Variation::new("e2e4", 0.35),
            Variation::new("d2d4", f64::NAN),
        ])
        .unwrap_err();
        assert_eq!(err.error_code(), "NON_FINITE_EVALUATION");
        assert!(err.to_string().contains("engineEvaluation[1]"));
    }

    #[test]
    fn test_find_first_match_wins() {
        let evaluation = EngineEvaluation::new(vec![
            Variation::new("e2e4", 1.0),
            Variation::new("d2d4", 0.5),
            Variation::new("d2d4", -3.0),
        ])
        .unwrap();
        assert_eq!(evaluation.find("d2d4").unwrap().evaluation, 0.5);
        assert!(evaluation.find("D2D4").is_none());
        assert_eq!(evaluation.duplicate_moves(), vec!["d2d4"]);
    }

    #[test]
    fn test_from_centipawns_flips_for_black() {
        let white = Variation::from_centipawns("e2e4", 35, Side::White);
        assert_eq!(white.evaluation, 0.35);

        let black = Variation::from_centipawns("e7e5", 120, Side::Black);
        assert_eq!(black.evaluation, -1.2);
    }

    #[test]
    fn test_from_engine_lines_orders_by_rank() {
        let lines = vec![
            EngineLine {
                rank: 3,
                centipawns: 10,
                uci_move: "c2c4".to_string(),
            },
            EngineLine {
                rank: 1,
                centipawns: 40,
                uci_move: "e2e4".to_string(),
            },
        ];
        let evaluation = EngineEvaluation::from_engine_lines(lines, Side::White).unwrap();
        let moves: Vec<&str> = evaluation.variations().iter().map(|v| v.mv.as_str()).collect();
        assert_eq!(moves, vec!["e2e4", "c2c4"]);
        assert_eq!(evaluation.top().evaluation, 0.4);
    }

    #[test]
    fn test_from_engine_lines_requires_a_line() {
        assert_eq!(
            EngineEvaluation::from_engine_lines(vec![], Side::Black),
            Err(ScoringError::EmptyEngineEvaluation)
        );
    }

    #[test]
    fn test_deserialize_goes_through_constructor() {
        let ok: EngineEvaluation =
            serde_json::from_str(r#"[{"move":"e2e4","evaluation":0.3}]"#).unwrap();
        assert_eq!(ok.top().mv, "e2e4");

        let err = serde_json::from_str::<EngineEvaluation>("[]").unwrap_err();
        assert!(err.to_string().contains("at least one variation"));
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["move"], "e2e4");
    }
}
