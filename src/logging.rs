//! Structured logging setup.
//!
//! Stderr gets an env-filtered fmt layer (`RUST_LOG` overrides the default
//! level); a parallel plain-text layer appends to `logs/crewline_YYYY-MM-DD.log`
//! so crew runs leave a daily audit trail.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::CrewError;

const LOG_DIR: &str = "logs";

/// Open (creating as needed) today's log file
fn daily_log_file() -> Result<(PathBuf, File), CrewError> {
    std::fs::create_dir_all(LOG_DIR)?;
    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = PathBuf::from(LOG_DIR).join(format!("crewline_{date}.log"));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Initialize global logging. `verbose` raises the default level to debug;
/// `RUST_LOG` always wins.
pub fn init(verbose: bool) -> Result<PathBuf, CrewError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},hyper=warn,reqwest=warn")));

    let (path, file) = daily_log_file()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();

    Ok(path)
}
