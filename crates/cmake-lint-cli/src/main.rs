//! cmake-lint CLI tool.
//!
//! Usage:
//! ```bash
//! cmake-lint check [OPTIONS] <PATH>...
//! cmake-lint list-categories
//! cmake-lint init
//! ```

use clap::{Args, Parser, Subcommand};
use cmake_lint_core::Outcome;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Style checker for CMake build scripts
#[derive(Parser)]
#[command(name = "cmake-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check CMake files for style issues
    Check {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Skip paths matching a glob (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Files or directories to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List diagnostic categories and whether they are enabled
    ListCategories {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Write a starter cmake-lint.toml
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Options that feed the resolved lint configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Filter expression, e.g. `-whitespace,+whitespace/tabs`.
    /// An empty value lists every category.
    #[arg(long)]
    pub filter: Option<String>,

    /// Configuration file; `None` disables configuration files
    #[arg(long)]
    pub config: Option<String>,

    /// Indentation width per block level
    #[arg(long)]
    pub spaces: Option<usize>,

    /// Maximum line length
    #[arg(long)]
    pub linelength: Option<usize>,

    /// Do not print the summary when there are no errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `path:line: message [category]` line per diagnostic.
    #[default]
    Text,
    /// JSON report.
    Json,
    /// Annotated source snippets.
    Fancy,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(Outcome::UsageError.exit_code());
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check {
            settings,
            format,
            exclude,
            paths,
        } => commands::check::run(&settings, format, &exclude, &paths),
        Commands::ListCategories { settings } => {
            commands::list_categories::run(&settings).map(|()| Outcome::Clean)
        }
        Commands::Init { force } => commands::init::run(force).map(|()| Outcome::Clean),
    };

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("FATAL ERROR: {e:#}");
            ExitCode::from(Outcome::UsageError.exit_code())
        }
    }
}
