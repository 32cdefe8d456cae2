//! Score question results from a file

use anyhow::Result;
use eval_quiz_application::{ApplicationError, ApplicationResult, Scorer};
use eval_quiz_domain::{QuestionResult, ScoreBreakdown};
use std::path::Path;
use tracing::info;

use crate::commands::CommandContext;
use crate::input::read_question_results;
use crate::output::ScoreReport;

/// Score every question result in `file` and print the breakdowns.
///
/// Fails after printing when any item could not be scored.
pub fn run(ctx: &CommandContext, file: &Path) -> Result<()> {
    let items = read_question_results(file)?;
    let report = build_report(&ctx.scorer, file.display().to_string(), items);

    info!(
        source = %report.source,
        items = report.items.len(),
        failures = report.failures(),
        "Scored file"
    );

    ctx.emit(&report)?;
    ensure_all_scored(&report)
}

/// Score decoded items, keeping decode failures in place
pub fn build_report(
    scorer: &Scorer,
    source: String,
    items: Vec<ApplicationResult<QuestionResult>>,
) -> ScoreReport {
    let outcomes: Vec<ApplicationResult<ScoreBreakdown>> = items
        .into_iter()
        .map(|item| item.and_then(|result| scorer.score(&result)))
        .collect();

    ScoreReport::new(source, &outcomes)
}

pub(crate) fn ensure_all_scored(report: &ScoreReport) -> Result<()> {
    match report.failures() {
        0 => Ok(()),
        failures => Err(ApplicationError::InvalidInput(format!(
            "{} of {} question results could not be scored",
            failures,
            report.items.len()
        ))
        .into()),
    }
}
