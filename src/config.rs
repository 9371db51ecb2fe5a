// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::crd::{ESTABLISH_TIMEOUT_SECS, POLL_INTERVAL_MS};
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Registrar configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay between establishment checks on a freshly registered CRD
    pub poll_interval: Duration,
    /// How long a freshly registered CRD may take to become established
    pub establish_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let poll_interval = interval_from_millis(
            env_override("NODESET_CRD_POLL_INTERVAL_MS")?,
            POLL_INTERVAL_MS,
        )
        .context("NODESET_CRD_POLL_INTERVAL_MS is not a valid millisecond count")?;

        let establish_timeout = timeout_from_secs(
            env_override("NODESET_CRD_ESTABLISH_TIMEOUT_SECS")?,
            ESTABLISH_TIMEOUT_SECS,
        )
        .context("NODESET_CRD_ESTABLISH_TIMEOUT_SECS is not a valid second count")?;

        Ok(Config {
            poll_interval,
            establish_timeout,
        })
    }
}

/// Value of an environment variable, None when unset. A value that is set
/// but not valid UTF-8 is an error rather than a fallback to the default.
fn env_override(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => bail!("{} contains non-UTF-8 data", key),
    }
}

/// Parse an optional override in milliseconds, falling back to the default
fn interval_from_millis(raw: Option<String>, default_ms: u64) -> Result<Duration> {
    let ms = match raw {
        Some(value) => value
            .parse::<u64>()
            .with_context(|| format!("cannot parse '{}'", value))?,
        None => default_ms,
    };
    Ok(Duration::from_millis(ms))
}

/// Parse an optional override in seconds, falling back to the default
fn timeout_from_secs(raw: Option<String>, default_secs: u64) -> Result<Duration> {
    let secs = match raw {
        Some(value) => value
            .parse::<u64>()
            .with_context(|| format!("cannot parse '{}'", value))?,
        None => default_secs,
    };
    Ok(Duration::from_secs(secs))
}
