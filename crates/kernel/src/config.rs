//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the listings JSON file (from ELENCO_DATA; the binary's
    /// `--data` flag takes precedence).
    pub data_path: Option<PathBuf>,

    /// Simulated load latency in milliseconds (default: 0).
    pub load_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let data_path = env::var("ELENCO_DATA").map(PathBuf::from).ok();

        let load_delay_ms = env::var("ELENCO_LOAD_DELAY_MS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .context("ELENCO_LOAD_DELAY_MS must be a valid u64")?;

        Ok(Self {
            data_path,
            load_delay_ms,
        })
    }
}
