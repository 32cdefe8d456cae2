//! Show the active point table

use anyhow::Result;
use eval_quiz_application::{ApplicationResult, Scorer};
use eval_quiz_domain::{EngineEvaluation, Variation};

use crate::commands::CommandContext;
use crate::output::{CurvePoint, PointsReport};

/// Differences, in pawns, sampled for the curve
const SAMPLE_DIFFERENCES: [f64; 9] = [0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 10.0];

pub fn run(ctx: &CommandContext) -> Result<()> {
    let report = build_report(&ctx.scorer)?;
    ctx.emit(&report)
}

/// Sample the eval curve and the best-move multiplier through the scorer
pub fn build_report(scorer: &Scorer) -> ApplicationResult<PointsReport> {
    let curve = SAMPLE_DIFFERENCES
        .iter()
        .map(|&difference| -> ApplicationResult<CurvePoint> {
            let lines = EngineEvaluation::new(vec![
                Variation::new("top", 0.0),
                Variation::new("sample", -difference),
            ])?;

            Ok(CurvePoint {
                difference,
                eval_points: scorer.eval_points(difference, 0.0),
                multiplier: scorer.best_move("sample", &lines).multiplier,
            })
        })
        .collect::<ApplicationResult<Vec<_>>>()?;

    Ok(PointsReport {
        points: *scorer.points(),
        curve,
    })
}
