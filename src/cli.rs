// src/cli.rs

//! CLI argument parsing using `clap`.

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::types::{CorequisitePolicy, SelectionPolicy};

/// Command-line arguments for `courseplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "courseplan",
    version,
    about = "Generate a multi-term course plan from degree requirements.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Courseplan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Courseplan.toml")]
    pub config: String,

    /// Plan only for this curriculum (repeatable). Default: every curriculum.
    #[arg(long = "curriculum", value_name = "NAME")]
    pub curricula: Vec<String>,

    /// Override `[planner].credit_limit`.
    #[arg(long, value_name = "CREDITS", allow_negative_numbers = true)]
    pub credit_limit: Option<i64>,

    /// Override `[planner].seed` for random elective selection.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Override `[planner].selection` (random, smallest-first, largest-first).
    #[arg(long, value_name = "POLICY")]
    pub selection: Option<SelectionPolicy>,

    /// Override `[planner].corequisites` (strict, same-term).
    #[arg(long, value_name = "POLICY")]
    pub corequisites: Option<CorequisitePolicy>,

    /// Date term labels are anchored to (YYYY-MM-DD). Default: today.
    #[arg(long, value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,

    /// Write the dependency graph in Graphviz DOT format to this path.
    #[arg(long, value_name = "PATH")]
    pub dot: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COURSEPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the catalog and curricula, but don't plan.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
