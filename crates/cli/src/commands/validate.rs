//! Validate question results without scoring them

use anyhow::Result;
use eval_quiz_application::{ApplicationError, ApplicationResult};
use eval_quiz_domain::QuestionResult;
use std::path::Path;

use crate::commands::CommandContext;
use crate::input::read_question_results;
use crate::output::{ItemError, ValidatedItem, ValidationReport};

/// Validate every question result in `file` and print the issues.
///
/// Fails after printing when any item has a blocking issue.
pub fn run(ctx: &CommandContext, file: &Path) -> Result<()> {
    let items = read_question_results(file)?;
    let report = build_report(file.display().to_string(), items);

    ctx.emit(&report)?;

    match report.blocking() {
        0 => Ok(()),
        blocking => Err(ApplicationError::ValidationFailed(format!(
            "{} of {} question results cannot be scored",
            blocking,
            report.items.len()
        ))
        .into()),
    }
}

pub fn build_report(
    source: String,
    items: Vec<ApplicationResult<QuestionResult>>,
) -> ValidationReport {
    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Ok(result) => ValidatedItem {
                index,
                validation: Some(result.validate()),
                error: None,
            },
            Err(e) => ValidatedItem {
                index,
                validation: None,
                error: Some(ItemError::from(&e)),
            },
        })
        .collect();

    ValidationReport::new(source, items)
}
