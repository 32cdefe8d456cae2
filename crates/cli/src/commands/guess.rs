//! Score one guess given on the command line

use anyhow::Result;
use eval_quiz_application::{ApplicationError, ApplicationResult};
use eval_quiz_domain::{
    Answer, EngineEvaluation, EngineLine, PositionContext, QuestionResult, Side, Variation,
};
use tracing::debug;

use crate::commands::score::ensure_all_scored;
use crate::commands::CommandContext;
use crate::output::ScoreReport;

/// Arguments of the `guess` command
#[derive(Debug, Clone, Default)]
pub struct GuessArgs {
    pub top_move: String,
    pub top_eval: f64,
    /// Lower-ranked engine lines, best first
    pub lines: Vec<(String, f64)>,
    /// Engine values are centipawns from the side to move's point of view
    pub centipawns: bool,
    pub eval: f64,
    pub mv: String,
    pub white: String,
    pub black: String,
    pub tournament: String,
    pub player_or_tournament: String,
    pub fen: Option<String>,
}

impl GuessArgs {
    /// Assemble the question result the scorer expects.
    ///
    /// Malformed engine values fail with [`ApplicationError::InvalidInput`],
    /// the same error a malformed file item produces.
    pub fn into_question_result(self) -> ApplicationResult<QuestionResult> {
        let mut question = PositionContext::new(self.white, self.black, self.tournament);
        if let Some(fen) = self.fen {
            question = question.with_fen(fen);
        }

        let lines = std::iter::once((self.top_move, self.top_eval)).chain(self.lines);
        let built = if self.centipawns {
            let side = side_to_move(&question)?;
            let lines = lines
                .zip(1u16..)
                .map(|((uci_move, value), rank)| {
                    Ok(EngineLine {
                        rank,
                        centipawns: whole_centipawns(&uci_move, value)?,
                        uci_move,
                    })
                })
                .collect::<ApplicationResult<Vec<_>>>()?;
            debug!(%side, lines = lines.len(), "Converting centipawn lines");
            EngineEvaluation::from_engine_lines(lines, side)
        } else {
            EngineEvaluation::new(
                lines
                    .map(|(mv, evaluation)| Variation::new(mv, evaluation))
                    .collect(),
            )
        };
        let engine_evaluation = built
            .map_err(|e| ApplicationError::InvalidInput(format!("engine evaluation: {}", e)))?;

        Ok(QuestionResult::new(
            question,
            engine_evaluation,
            Answer::new(self.eval, self.mv, self.player_or_tournament),
        ))
    }
}

/// White moves when no FEN is given; a FEN that names no side is refused.
fn side_to_move(question: &PositionContext) -> ApplicationResult<Side> {
    match (&question.fen, question.side_to_move()) {
        (None, _) => Ok(Side::White),
        (Some(_), Some(side)) => Ok(side),
        (Some(fen), None) => Err(ApplicationError::InvalidInput(format!(
            "cannot read the side to move from FEN '{}'",
            fen
        ))),
    }
}

fn whole_centipawns(mv: &str, value: f64) -> ApplicationResult<i32> {
    if value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Ok(value as i32)
    } else {
        Err(ApplicationError::InvalidInput(format!(
            "line {}: {} is not a whole number of centipawns",
            mv, value
        )))
    }
}

/// Parse an engine line given as `MOVE=EVAL`
pub fn parse_line(s: &str) -> std::result::Result<(String, f64), String> {
    let (mv, evaluation) = s
        .split_once('=')
        .ok_or_else(|| format!("expected MOVE=EVAL, got '{}'", s))?;

    let mv = mv.trim();
    if mv.is_empty() {
        return Err(format!("missing move in '{}'", s));
    }

    let evaluation: f64 = evaluation
        .trim()
        .parse()
        .map_err(|e| format!("invalid evaluation in '{}': {}", s, e))?;

    Ok((mv.to_string(), evaluation))
}

pub fn run(ctx: &CommandContext, args: GuessArgs) -> Result<()> {
    let result = args.into_question_result()?;
    let outcome = ctx.scorer.score(&result);
    let report = ScoreReport::new("command line", &[outcome]);

    ctx.emit(&report)?;
    ensure_all_scored(&report)
}
