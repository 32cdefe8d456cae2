//! CLI commands

pub mod guess;
pub mod points;
pub mod score;
pub mod settings;
pub mod validate;

use crate::config::Config;
use crate::output::Render;
use anyhow::Result;
use eval_quiz_application::{Scorer, ScorerBuilder};
use eval_quiz_common::AppConfig;

/// Context passed to all commands
pub struct CommandContext {
    pub config: Config,
    pub app_config: AppConfig,
    pub scorer: Scorer,
}

impl CommandContext {
    /// Create a new command context, building the scorer from the
    /// configured point table
    pub fn new(config: Config, app_config: AppConfig) -> Result<Self> {
        let scorer = ScorerBuilder::new()
            .points(app_config.points)
            .detailed_logging(config.debug)
            .build()?;

        Ok(Self {
            config,
            app_config,
            scorer,
        })
    }

    /// Print a report in the configured output format
    pub fn emit<R: Render>(&self, report: &R) -> Result<()> {
        println!("{}", report.render(self.config.output_format)?);
        Ok(())
    }
}
