//! Runtime configuration: defaults, then `TUI_DRIFT_*` environment variables,
//! then command-line flags.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::core::{MovementTuning, WorldConfig};

pub const ENV_SEED: &str = "TUI_DRIFT_SEED";
pub const ENV_STARS: &str = "TUI_DRIFT_STARS";
pub const ENV_FUEL_CANS: &str = "TUI_DRIFT_FUEL_CANS";
pub const ENV_MAP_SIZE: &str = "TUI_DRIFT_MAP_SIZE";
pub const ENV_RELEASE_TIMEOUT_MS: &str = "TUI_DRIFT_RELEASE_TIMEOUT_MS";
pub const ENV_LOG_PATH: &str = "TUI_DRIFT_LOG_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub world: WorldConfig,
    pub tuning: MovementTuning,
    /// Overrides both synthesized key-release timeouts.
    pub release_timeout_ms: Option<u32>,
    /// Run this many ticks without a terminal, then print a summary.
    pub headless_ticks: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            tuning: MovementTuning::default(),
            release_timeout_ms: None,
            headless_ticks: None,
            log_path: None,
        }
    }
}

impl Config {
    /// Resolve from the process environment and `args` (without argv[0]).
    pub fn load(args: &[String]) -> Result<Self> {
        let mut config = Self::from_env_with(|key| std::env::var(key).ok())?;
        config.apply_args(args)?;
        Ok(config)
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = lookup(ENV_SEED) {
            config.world.seed = Some(parse_value(ENV_SEED, &v)?);
        }
        if let Some(v) = lookup(ENV_STARS) {
            config.world.star_count = parse_value(ENV_STARS, &v)?;
        }
        if let Some(v) = lookup(ENV_FUEL_CANS) {
            config.world.fuel_can_count = parse_value(ENV_FUEL_CANS, &v)?;
        }
        if let Some(v) = lookup(ENV_MAP_SIZE) {
            config.world.map_size = parse_map_size(ENV_MAP_SIZE, &v)?;
        }
        if let Some(v) = lookup(ENV_RELEASE_TIMEOUT_MS) {
            config.release_timeout_ms = Some(parse_value(ENV_RELEASE_TIMEOUT_MS, &v)?);
        }
        if let Some(v) = lookup(ENV_LOG_PATH) {
            if !v.is_empty() {
                config.log_path = Some(PathBuf::from(v));
            }
        }
        Ok(config)
    }

    /// Apply command-line flags on top of the current values.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            let mut value = || {
                i += 1;
                args.get(i)
                    .map(String::as_str)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag {
                "--seed" => self.world.seed = Some(parse_value(flag, value()?)?),
                "--stars" => self.world.star_count = parse_value(flag, value()?)?,
                "--fuel-cans" => self.world.fuel_can_count = parse_value(flag, value()?)?,
                "--map-size" => self.world.map_size = parse_map_size(flag, value()?)?,
                "--release-timeout-ms" => {
                    self.release_timeout_ms = Some(parse_value(flag, value()?)?)
                }
                "--headless" => self.headless_ticks = Some(parse_value(flag, value()?)?),
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| anyhow!("invalid value for {}: {:?}", name, raw))
}

fn parse_map_size(name: &str, raw: &str) -> Result<f64> {
    let size: f64 = parse_value(name, raw)?;
    if !size.is_finite() || size <= 0.0 {
        return Err(anyhow!(
            "invalid value for {}: {:?} (must be > 0)",
            name,
            raw
        ));
    }
    Ok(size)
}
