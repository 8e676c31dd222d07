//! Logger setup for the binary.
//!
//! Raw mode owns the terminal, so interactive runs only log to a file.
//! Headless runs without a log file log to stderr.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::config::Config;

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// No logger is installed.
    Off,
}

impl LogTarget {
    pub fn for_config(config: &Config) -> Self {
        match &config.log_path {
            Some(path) => LogTarget::File(path.clone()),
            None if config.headless_ticks.is_some() => LogTarget::Stderr,
            None => LogTarget::Off,
        }
    }
}

/// Install `env_logger` for `config`; `RUST_LOG` filters, default `info`.
pub fn init_logging(config: &Config) -> Result<LogTarget> {
    let target = LogTarget::for_config(config);
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match &target {
        LogTarget::File(path) => {
            let file = match File::create(path) {
                Ok(file) => file,
                Err(e) => return Err(anyhow!("cannot open log file {}: {}", path.display(), e)),
            };
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        LogTarget::Stderr => {
            builder.target(env_logger::Target::Stderr);
        }
        LogTarget::Off => return Ok(LogTarget::Off),
    }
    builder.try_init()?;
    Ok(target)
}
