use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::platform::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "geo")]
#[command(about = "Score a website's generative engine optimization (GEO) readiness")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Directory holding the persisted session (paid flag).
    #[arg(long, default_value = ".")]
    pub state_dir: PathBuf,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Log level (off/error/warn/info/debug/trace).
    #[arg(long, default_value = "warn", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Address the app was opened with; `paid=1` marks a completed checkout.
    #[arg(long)]
    pub return_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a website.
    Scan {
        url: String,
        /// Apply the pro "improve score" re-score afterwards.
        #[arg(long)]
        improve: bool,
        /// Write the result as CSV into this directory (pro only).
        #[arg(long)]
        export: Option<PathBuf>,
        /// Print the raw result as JSON instead of the report.
        #[arg(long)]
        json: bool,
    },
    /// Simulate a completed checkout and unlock the pro plan.
    Upgrade,
    /// Return to the free plan.
    Downgrade,
    /// Show plan and environment status.
    Status,
    /// Validate the environment configuration; fails when invalid.
    CheckEnv,
    /// Print mock analytics for a website as JSON.
    Analytics {
        url: String,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_warn() {
        let cli = Cli::try_parse_from(["geo", "status"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let cli = Cli::try_parse_from(["geo", "--log-level", "DEBUG", "status"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn misspelled_log_level_is_rejected() {
        let err = Cli::try_parse_from(["geo", "--log-level", "verbsoe", "status"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
