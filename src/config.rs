//! Ledger location configuration.
//!
//! Each path resolves independently: command-line flag, then environment
//! variable, then config file, then the built-in default.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PENDING_FILE: &str = "orders.json";
pub const DEFAULT_SERVED_FILE: &str = "output_orders.json";
pub const PENDING_ENV: &str = "ODESK_PENDING";
pub const SERVED_ENV: &str = "ODESK_SERVED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeskConfig {
    #[serde(default = "default_pending_path")]
    pub pending_path: PathBuf,
    #[serde(default = "default_served_path")]
    pub served_path: PathBuf,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            pending_path: default_pending_path(),
            served_path: default_served_path(),
        }
    }
}

fn default_pending_path() -> PathBuf {
    PathBuf::from(DEFAULT_PENDING_FILE)
}

fn default_served_path() -> PathBuf {
    PathBuf::from(DEFAULT_SERVED_FILE)
}

/// Path overrides supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub pending: Option<PathBuf>,
    pub served: Option<PathBuf>,
}

/// Pretty JSON of the default config, for `odesk config --stub`.
pub fn config_stub() -> Result<String> {
    serde_json::to_string_pretty(&DeskConfig::default()).context("serialize config stub")
}

/// Per-user config location, `<config dir>/order-desk/config.json`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("order-desk").join("config.json"))
}

pub fn load_config(path: &Path) -> Result<DeskConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: DeskConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

pub fn validate_config(config: &DeskConfig) -> Result<()> {
    if config.pending_path.as_os_str().is_empty() {
        return Err(anyhow!("pending_path must be non-empty"));
    }
    if config.served_path.as_os_str().is_empty() {
        return Err(anyhow!("served_path must be non-empty"));
    }
    if config.pending_path == config.served_path {
        return Err(anyhow!(
            "pending and served ledgers must be different files (both {})",
            config.pending_path.display()
        ));
    }
    Ok(())
}

/// Resolve the effective config for this process.
pub fn resolve_config(explicit: Option<&Path>, overrides: &PathOverrides) -> Result<DeskConfig> {
    let base = match explicit {
        Some(path) => load_config(path)?,
        None => match user_config_path().filter(|path| path.is_file()) {
            Some(path) => load_config(&path)?,
            None => DeskConfig::default(),
        },
    };
    let config = apply_overrides(base, overrides, |key| std::env::var_os(key).map(PathBuf::from));
    validate_config(&config)?;
    tracing::debug!(
        pending = %config.pending_path.display(),
        served = %config.served_path.display(),
        "resolved ledger paths"
    );
    Ok(config)
}

fn apply_overrides<F>(base: DeskConfig, overrides: &PathOverrides, env: F) -> DeskConfig
where
    F: Fn(&str) -> Option<PathBuf>,
{
    let pick = |flag: &Option<PathBuf>, key: &str, fallback: PathBuf| {
        flag.clone()
            .or_else(|| env(key).filter(|path| !path.as_os_str().is_empty()))
            .unwrap_or(fallback)
    };
    DeskConfig {
        pending_path: pick(&overrides.pending, PENDING_ENV, base.pending_path),
        served_path: pick(&overrides.served, SERVED_ENV, base.served_path),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
