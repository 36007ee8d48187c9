//! Logging setup for the trip day planner
//!
//! The TUI runs on the alternate screen, so diagnostics go to an opt-in
//! log file rather than stderr. Without `--log-file`, log events are
//! discarded.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> io::Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tripday={level}")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_writer(Arc::new(file)).init();
        }
        None => builder.with_writer(io::sink).init(),
    }

    Ok(())
}
