//! Printable results of the CLI commands

use anyhow::Result;
use chrono::{DateTime, Utc};
use eval_quiz_application::{ApplicationError, ApplicationResult};
use eval_quiz_common::AppConfig;
use eval_quiz_domain::{PointTable, ScoreBreakdown, ValidationResult};
use serde::Serialize;

use super::{colors, PlainFormatter, Render, TableFormatter};
use crate::config::Config;

/// Why an item of an input file could not be processed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemError {
    pub code: String,
    pub message: String,
}

impl From<&ApplicationError> for ItemError {
    fn from(error: &ApplicationError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

/// Score of one question result, or the reason it has none
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ItemError>,
}

impl ScoredItem {
    pub fn new(index: usize, outcome: &ApplicationResult<ScoreBreakdown>) -> Self {
        match outcome {
            Ok(breakdown) => Self {
                index,
                breakdown: Some(breakdown.clone()),
                error: None,
            },
            Err(e) => Self {
                index,
                breakdown: None,
                error: Some(ItemError::from(e)),
            },
        }
    }
}

/// Output of `score` and `guess`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub source: String,
    pub scored_at: DateTime<Utc>,
    pub items: Vec<ScoredItem>,
}

impl ScoreReport {
    pub fn new(source: impl Into<String>, outcomes: &[ApplicationResult<ScoreBreakdown>]) -> Self {
        Self {
            source: source.into(),
            scored_at: Utc::now(),
            items: outcomes
                .iter()
                .enumerate()
                .map(|(index, outcome)| ScoredItem::new(index, outcome))
                .collect(),
        }
    }

    /// Number of items without a score
    pub fn failures(&self) -> usize {
        self.items.iter().filter(|item| item.error.is_some()).count()
    }

    fn footer(&self) -> String {
        format!(
            "Scored {} of {} from {} at {}",
            self.items.len() - self.failures(),
            self.items.len(),
            self.source,
            self.scored_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

impl Render for ScoreReport {
    fn render_table(&self) -> Result<String> {
        let rows = self
            .items
            .iter()
            .map(|item| match (&item.breakdown, &item.error) {
                (Some(b), _) => vec![
                    item.index.to_string(),
                    yes_no(b.found_winning_side).to_string(),
                    PlainFormatter::points(b.eval_points),
                    yes_no(b.found_best_move).to_string(),
                    PlainFormatter::multiplier(b.best_move_multiplier),
                    yes_no(b.found_player_or_tournament).to_string(),
                    PlainFormatter::points(b.total),
                ],
                (None, Some(e)) => vec![
                    item.index.to_string(),
                    format!("{}: {}", e.code, e.message),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                ],
                (None, None) => vec![item.index.to_string()],
            })
            .collect();

        let table = TableFormatter::simple(
            &[
                "#",
                "Winning side",
                "Eval points",
                "Best move",
                "Multiplier",
                "Player/tournament",
                "Total",
            ],
            rows,
            &[2, 4, 6],
        );

        Ok(format!("{}\n{}", table, colors::dim(&self.footer())))
    }

    fn render_plain(&self) -> Result<String> {
        let mut lines = Vec::with_capacity(self.items.len() + 1);

        for item in &self.items {
            match (&item.breakdown, &item.error) {
                (Some(b), _) => lines.push(format!(
                    "#{} {} {}  side {}  eval {} {} = {}  move {}  name {}",
                    item.index,
                    colors::bold("total"),
                    colors::bold(&PlainFormatter::points(b.total)),
                    colors::flag(b.found_winning_side),
                    PlainFormatter::points(b.eval_points),
                    PlainFormatter::multiplier(b.best_move_multiplier),
                    PlainFormatter::points(b.weighted_eval_points()),
                    colors::flag(b.found_best_move),
                    colors::flag(b.found_player_or_tournament),
                )),
                (None, Some(e)) => lines.push(format!(
                    "#{} {} {}: {}",
                    item.index,
                    colors::error("error"),
                    e.code,
                    e.message
                )),
                (None, None) => {}
            }
        }

        lines.push(colors::dim(&self.footer()).to_string());
        Ok(lines.join("\n"))
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Validation outcome of one question result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedItem {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ItemError>,
}

impl ValidatedItem {
    /// Whether the item cannot be scored
    pub fn is_blocking(&self) -> bool {
        self.error.is_some()
            || self
                .validation
                .as_ref()
                .map_or(false, ValidationResult::has_errors)
    }
}

/// Output of `validate`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub source: String,
    pub items: Vec<ValidatedItem>,
}

impl ValidationReport {
    pub fn new(source: impl Into<String>, items: Vec<ValidatedItem>) -> Self {
        Self {
            source: source.into(),
            items,
        }
    }

    /// Number of items that cannot be scored
    pub fn blocking(&self) -> usize {
        self.items.iter().filter(|item| item.is_blocking()).count()
    }
}

impl Render for ValidationReport {
    fn render_table(&self) -> Result<String> {
        let mut rows = Vec::new();

        for item in &self.items {
            let index = item.index.to_string();
            match (&item.validation, &item.error) {
                (_, Some(e)) => rows.push(vec![
                    index,
                    "error".to_string(),
                    "-".to_string(),
                    format!("{}: {}", e.code, e.message),
                ]),
                (Some(v), None) if v.total_issues() == 0 => rows.push(vec![
                    index,
                    "ok".to_string(),
                    "-".to_string(),
                    "No issues".to_string(),
                ]),
                (Some(v), None) => {
                    for issue in v.issues() {
                        rows.push(vec![
                            index.clone(),
                            issue.severity.to_string(),
                            issue.path.clone(),
                            issue.message.clone(),
                        ]);
                    }
                }
                (None, None) => {}
            }
        }

        let table = TableFormatter::simple(&["#", "Severity", "Path", "Message"], rows, &[]);
        let footer = format!(
            "{} of {} items can be scored",
            self.items.len() - self.blocking(),
            self.items.len()
        );

        Ok(format!("{}\n{}", table, colors::dim(&footer)))
    }

    fn render_plain(&self) -> Result<String> {
        let mut lines = Vec::new();

        for item in &self.items {
            match (&item.validation, &item.error) {
                (_, Some(e)) => lines.push(format!(
                    "#{} {} {}: {}",
                    item.index,
                    colors::error("error"),
                    e.code,
                    e.message
                )),
                (Some(v), None) if v.total_issues() == 0 => {
                    lines.push(format!("#{} {}", item.index, colors::success("ok")))
                }
                (Some(v), None) => {
                    for issue in v.issues() {
                        lines.push(format!(
                            "#{} {} {}: {}",
                            item.index,
                            colors::severity(issue.severity),
                            issue.path,
                            issue.message
                        ));
                    }
                }
                (None, None) => {}
            }
        }

        Ok(lines.join("\n"))
    }
}

/// One sample of the scoring curve
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    /// Absolute difference in pawns
    pub difference: f64,
    /// Eval points for a guess this far from the engine
    pub eval_points: f64,
    /// Multiplier for a move this far below the top line
    pub multiplier: f64,
}

/// Output of `points`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsReport {
    pub points: PointTable,
    pub curve: Vec<CurvePoint>,
}

impl Render for PointsReport {
    fn render_table(&self) -> Result<String> {
        let p = &self.points;
        let constants = TableFormatter::key_value(vec![
            ("Winning side", PlainFormatter::points(p.winning_side_points)),
            ("Eval base", PlainFormatter::points(p.eval_base_points)),
            ("Eval penalty per pawn", PlainFormatter::points(p.eval_penalty_per_pawn)),
            ("Best move max", PlainFormatter::multiplier(p.best_move_max_multiplier)),
            ("Best move decay per pawn", format!("{:.2}", p.best_move_decay_per_pawn)),
            ("Best move min", PlainFormatter::multiplier(p.best_move_min_multiplier)),
            ("Player or tournament", PlainFormatter::points(p.player_or_tournament_points)),
        ]);

        let rows = self
            .curve
            .iter()
            .map(|c| {
                vec![
                    format!("{:.2}", c.difference),
                    PlainFormatter::points(c.eval_points),
                    PlainFormatter::multiplier(c.multiplier),
                ]
            })
            .collect();
        let curve = TableFormatter::simple(
            &["Difference (pawns)", "Eval points", "Multiplier"],
            rows,
            &[0, 1, 2],
        );

        Ok(format!("{}\n{}", constants, curve))
    }

    fn render_plain(&self) -> Result<String> {
        PlainFormatter::format(self)
    }
}

/// Output of `config show`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigReport {
    pub config_file: String,
    pub cli: Config,
    pub app: AppConfig,
}

impl Render for ConfigReport {
    fn render_table(&self) -> Result<String> {
        Ok(TableFormatter::key_value(vec![
            ("Config file", self.config_file.clone()),
            ("Output format", self.cli.output_format.to_string()),
            ("Colored", self.cli.colored.to_string()),
            ("Debug", self.cli.debug.to_string()),
            ("Log level", self.app.telemetry.log_level.clone()),
            ("JSON logging", self.app.telemetry.json_logging.to_string()),
        ]))
    }

    fn render_plain(&self) -> Result<String> {
        PlainFormatter::format(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eval_quiz_domain::ScoringError;

    fn breakdown(total: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            found_winning_side: true,
            eval_points: 50.0,
            found_best_move: true,
            best_move_multiplier: 3.0,
            found_player_or_tournament: false,
            total,
        }
    }

    fn mixed_report() -> ScoreReport {
        ScoreReport::new(
            "results.json",
            &[
                Ok(breakdown(170.0)),
                Err(ApplicationError::from(ScoringError::EmptyEngineEvaluation)),
            ],
        )
    }

    #[test]
    fn test_score_report_counts_failures() {
        let report = mixed_report();
        assert_eq!(report.items.len(), 2);
        assert_eq!(report.failures(), 1);
        assert!(report.footer().starts_with("Scored 1 of 2 from results.json"));
    }

    #[test]
    fn test_score_report_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&mixed_report().render_json().unwrap()).unwrap();

        assert_eq!(json["source"], "results.json");
        assert!(json["scoredAt"].is_string());
        assert_eq!(json["items"][0]["breakdown"]["total"], 170.0);
        assert!(json["items"][0].get("error").is_none());
        assert_eq!(json["items"][1]["error"]["code"], "EMPTY_ENGINE_EVALUATION");
    }

    #[test]
    fn test_score_report_table_and_plain() {
        colored::control::set_override(false);
        let report = mixed_report();

        let table = report.render(crate::output::OutputFormat::Table).unwrap();
        assert!(table.contains("170.00"));
        assert!(table.contains("x3.00"));
        assert!(table.contains("EMPTY_ENGINE_EVALUATION"));

        let plain = report.render_plain().unwrap();
        assert!(plain.contains("#0 total 170.00"));
        assert!(plain.contains("eval 50.00 x3.00 = 150.00"));
        assert!(plain.contains("#1 error EMPTY_ENGINE_EVALUATION"));
    }

    #[test]
    fn test_validation_report_blocking() {
        let mut with_error = ValidationResult::success();
        with_error.add_error("answer.evaluation", "Evaluation must be finite, got NaN");
        let mut with_info = ValidationResult::success();
        with_info.add_info("answer.bestMove", "Move 'h4' is not among the 3 engine candidates");

        let report = ValidationReport::new(
            "results.json",
            vec![
                ValidatedItem {
                    index: 0,
                    validation: Some(with_info),
                    error: None,
                },
                ValidatedItem {
                    index: 1,
                    validation: Some(with_error),
                    error: None,
                },
                ValidatedItem {
                    index: 2,
                    validation: None,
                    error: Some(ItemError {
                        code: "INVALID_INPUT".to_string(),
                        message: "missing field `answer`".to_string(),
                    }),
                },
            ],
        );

        assert_eq!(report.blocking(), 2);

        colored::control::set_override(false);
        let plain = report.render_plain().unwrap();
        assert!(plain.contains("#0 info answer.bestMove"));
        assert!(plain.contains("#1 error answer.evaluation"));
        assert!(plain.contains("#2 error INVALID_INPUT"));
    }

    #[test]
    fn test_points_report_table() {
        let report = PointsReport {
            points: PointTable::default(),
            curve: vec![CurvePoint {
                difference: 1.0,
                eval_points: 34.0,
                multiplier: 2.25,
            }],
        };

        let table = report.render_table().unwrap();
        assert!(table.contains("Eval penalty per pawn"));
        assert!(table.contains("34.00"));
        assert!(table.contains("x2.25"));
    }
}
