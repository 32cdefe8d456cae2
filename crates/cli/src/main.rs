//! Eval Quiz CLI
//!
//! Scores guesses about chess positions against engine evaluations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use eval_quiz_application::ApplicationError;
use eval_quiz_cli::commands::{guess, points, score, settings, validate, CommandContext};
use eval_quiz_cli::config::Config;
use eval_quiz_cli::output::OutputFormat;
use eval_quiz_common::{init_tracing, AppConfig};

#[derive(Parser, Debug)]
#[command(name = "eval-quiz")]
#[command(author, version, about = "Score guesses about chess positions")]
#[command(long_about = "Score guesses about chess positions against engine evaluations.\n\n\
    A guess names the evaluation, the best move and a player or the tournament; \
    each part earns points.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (overrides config)
    #[arg(short = 'o', long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score question results from a JSON file
    #[command(alias = "s")]
    Score {
        /// File holding one question result or an array of them
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Check question results for problems without scoring them
    #[command(alias = "v")]
    Validate {
        /// File holding one question result or an array of them
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Score a single guess given as arguments
    #[command(alias = "g")]
    Guess {
        /// Engine's best move
        #[arg(long)]
        top_move: String,

        /// Engine's evaluation of the best move, in pawns
        #[arg(long, allow_negative_numbers = true)]
        top_eval: f64,

        /// Lower-ranked engine line, best first (repeatable)
        #[arg(long = "line", value_name = "MOVE=EVAL", value_parser = guess::parse_line)]
        lines: Vec<(String, f64)>,

        /// Read --top-eval and --line values as whole centipawns from the side
        /// to move's point of view (side taken from --fen, White without one)
        #[arg(long)]
        centipawns: bool,

        /// Guessed evaluation, in pawns
        #[arg(long, allow_negative_numbers = true)]
        eval: f64,

        /// Guessed best move
        #[arg(long = "move")]
        mv: String,

        /// White player's name
        #[arg(long, default_value = "")]
        white: String,

        /// Black player's name
        #[arg(long, default_value = "")]
        black: String,

        /// Tournament name
        #[arg(long, default_value = "")]
        tournament: String,

        /// Guessed player or tournament
        #[arg(long, default_value = "")]
        player_or_tournament: String,

        /// Position; only its side-to-move field is read, by --centipawns
        #[arg(long)]
        fen: Option<String>,
    },

    /// Show the active point table
    #[command(alias = "p")]
    Points,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Reset configuration to defaults
    Reset,
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "eval-quiz", &mut std::io::stdout());
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), e);
        if verbose {
            eprintln!("\n{}", "Details:".dimmed());
            eprintln!("{:?}", e);
        }
        let code = e
            .downcast_ref::<ApplicationError>()
            .map_or(1, ApplicationError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Handle completions command early (doesn't need config)
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if cli.no_color || !config.colored {
        colored::control::set_override(false);
    }

    let mut app_config = AppConfig::load()?;
    if cli.verbose || config.debug {
        app_config.telemetry.log_level = "debug".to_string();
    }
    init_tracing(&app_config.telemetry)?;

    let ctx = CommandContext::new(config, app_config)?;

    match cli.command {
        Commands::Score { file } => score::run(&ctx, &file),
        Commands::Validate { file } => validate::run(&ctx, &file),
        Commands::Guess {
            top_move,
            top_eval,
            lines,
            centipawns,
            eval,
            mv,
            white,
            black,
            tournament,
            player_or_tournament,
            fen,
        } => guess::run(
            &ctx,
            guess::GuessArgs {
                top_move,
                top_eval,
                lines,
                centipawns,
                eval,
                mv,
                white,
                black,
                tournament,
                player_or_tournament,
                fen,
            },
        ),
        Commands::Points => points::run(&ctx),
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => settings::show(&ctx),
            Some(ConfigCommands::Set { key, value }) => settings::set(&key, &value),
            Some(ConfigCommands::Get { key }) => settings::get(&ctx, &key),
            Some(ConfigCommands::Reset) => settings::reset(),
        },
        Commands::Completions { .. } => Ok(()),
    }
}
