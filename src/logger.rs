//! Logger setup for the binary: stderr at a verbosity-derived level, plus an
//! optional debug-level log file.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, WriteLogger};

/// Map the number of `-v` flags to a log level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

pub fn init_logger(debug_file: Option<&Path>, level: LevelFilter) -> Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(level, Config::default(), std::io::stderr())];

    if let Some(path) = debug_file {
        let file = File::create(path)
            .with_context(|| format!("opening debug file '{}'", path.display()))?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }

    CombinedLogger::init(loggers).context("initializing the logger")?;
    Ok(())
}
