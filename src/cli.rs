//! Command-line interface parsing for the trip day planner
//!
//! This module handles parsing of CLI arguments using clap: the server to
//! talk to, the optional calendar date of day 1, and logging options.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use thiserror::Error;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified start date is not a valid calendar date
    #[error("Invalid start date: '{0}'. Expected YYYY-MM-DD, e.g. 2026-08-10")]
    InvalidStartDate(String),
}

/// Trip day planner - manage a trip's days and attractions from the terminal
#[derive(Parser, Debug)]
#[command(name = "tripday")]
#[command(about = "Plan a multi-day trip against a trip-planner server")]
#[command(version)]
pub struct Cli {
    /// Base URL of the trip-planner API server
    #[arg(long, value_name = "URL", default_value = "http://localhost:3000")]
    pub server: String,

    /// Calendar date of day 1, shown alongside day numbers (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file (the TUI leaves no usable stderr)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Base URL of the trip-planner API server
    pub server: String,
    /// Calendar date of day 1, if given
    pub start_date: Option<NaiveDate>,
    /// Log verbosity from counted -v flags
    pub verbosity: u8,
    /// Log file path, if logging to disk was requested
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            server: "http://localhost:3000".to_string(),
            start_date: None,
            verbosity: 0,
            log_file: None,
        }
    }
}

/// Parses a start date argument into a NaiveDate.
///
/// # Arguments
/// * `s` - The date string from CLI, in YYYY-MM-DD form
///
/// # Returns
/// * `Ok(NaiveDate)` if the string is a valid calendar date
/// * `Err(CliError::InvalidStartDate)` otherwise
pub fn parse_start_date_arg(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| CliError::InvalidStartDate(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an invalid start date was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let start_date = match &cli.start_date {
            None => None,
            Some(s) => Some(parse_start_date_arg(s)?),
        };

        Ok(Self {
            server: cli.server.clone(),
            start_date,
            verbosity: cli.verbose,
            log_file: cli.log_file.clone(),
        })
    }
}
