//! `tracing` subscriber setup shared by the binaries.

use std::{ fs::File, path::Path, sync::Mutex };
use anyhow::{ Context, Result };
use tracing_subscriber::{ filter::LevelFilter, fmt, prelude::* };

/// Map a `-v` count and `-q` flag to a level filter.
///
/// Warnings are shown by default.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Install the global subscriber: compact output on stderr, plus an optional
/// plain-text copy written to `log_file`.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>)
    -> Result<()>
{
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    let installed = if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| {
                format!("failed to create log file '{}'", path.display())
            })?;
        let file_layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true);
        subscriber.with(file_layer).try_init()
    } else {
        subscriber.try_init()
    };
    installed.context("failed to install global log subscriber")
}
