//! Logging initialization for the `geo` binary.
//!
//! Terminal output always goes to stderr; stdout carries reports and JSON.
//! File output goes to `./geo.log` in the current working directory.

use std::fs::File;

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./geo.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogDestination {
    /// Write to ./geo.log in the current directory.
    File,
    /// Write to stderr.
    #[default]
    Terminal,
    /// Write to both file and stderr.
    Both,
    /// No logging.
    Off,
}

impl LogDestination {
    fn writes_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Initialize the global logger for `destination` at `level`.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.writes_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.writes_file() {
        match File::create(LOG_FILE) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: could not create {LOG_FILE}: {err}"),
        }
    }

    if loggers.is_empty() {
        return;
    }
    if let Err(err) = CombinedLogger::init(loggers) {
        eprintln!("Warning: logger already initialized: {err}");
    }
}
