//! CLI argument definitions for the assessment toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "assess",
    version,
    about = "Eligibility assessment toolkit - validate configs and run conformance checks",
    long_about = "Validate multi-locale eligibility questionnaire configs and run the\n\
                  offline conformance harness against the rule evaluation engine.\n\
                  One logic JSON file per locale; test cases in test-cases.json."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw answer values in log output (health data; off by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate all locale configs and run the batch test cases.
    Check(CheckArgs),

    /// Validate all locale configs without running test cases.
    Validate(ValidateArgs),

    /// Run one assessment and print the result as JSON.
    Run(RunArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Directory containing the logic_<locale>.json files.
    #[arg(value_name = "CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Test case file (default: <CONFIG_DIR>/test-cases.json).
    #[arg(long = "cases", value_name = "PATH")]
    pub cases: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Directory containing the logic_<locale>.json files.
    #[arg(value_name = "CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Also write a machine-readable JSON report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory containing the logic_<locale>.json files.
    #[arg(value_name = "CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Locale whose config to run against.
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locale: String,

    /// JSON file mapping question ids to answers.
    #[arg(long = "answers", value_name = "PATH")]
    pub answers: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
