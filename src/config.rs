//! Runtime configuration for the terminal binary.
//!
//! Environment variables are read first and fall back to defaults when unset
//! or unparsable; command-line flags then override them and are strict.

use std::fs::OpenOptions;

use anyhow::{anyhow, Result};

use crate::input::SwipeConfig;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Piece RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Log file. Logging is off when unset (the terminal is taken by the game).
    pub log_path: Option<String>,
    pub swipe: SwipeConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = SwipeConfig::default();

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let min_distance = lookup("BLOCKFALL_SWIPE_MIN")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.min_distance);

        let max_ms = lookup("BLOCKFALL_SWIPE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_ms);

        Self {
            seed,
            log_path,
            swipe: SwipeConfig {
                min_distance,
                max_ms,
                ..defaults
            },
        }
    }

    /// Apply command-line flags on top of the environment.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    let seed = v
                        .parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    if v.trim().is_empty() {
                        return Err(anyhow!("empty --log path"));
                    }
                    self.log_path = Some(v.clone());
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }
}

/// Install the global logger, appending to `log_path` when one is configured.
///
/// The filter defaults to `info` and honours `RUST_LOG`.
pub fn init_logging(log_path: Option<&str>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("open log file {} failed: {}", path, e))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| anyhow!("logger init failed: {}", e))?;
    Ok(())
}
