//! Bench configuration: per-task tuning loaded from a YAML file.
//!
//! Every field has a stock default, so a partial file (or no file at all)
//! yields the canonical table:
//!
//! | Task | period_ms | priority | extras |
//! |---|---|---|---|
//! | range-watch | 200 | 0 | `threshold_cm: 20`, `echo_timeout_us: 30000` |
//! | climate | 2000 | 1 | |
//! | blink | 1000 | 2 | |
//!
//! ```yaml
//! range_watch:
//!   period_ms: 200
//!   threshold_cm: 15
//! blink:
//!   enabled: false
//! ```
//!
//! Tuning stops at task parameters on purpose.  The table itself — which
//! tasks exist and in which order — is fixed in code, because order is the
//! priority tie-break and reshuffling it from a config file would change
//! scheduling behaviour silently.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

// ── Per-task sections ─────────────────────────────────────────────────────────

/// Tuning for the range-watch task (distance probe + proximity LED).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RangeWatchConfig {
    pub period_ms: u64,
    pub priority: u8,
    pub enabled: bool,

    /// Distances strictly below this (and above zero) count as "object
    /// detected" and light the LED.
    pub threshold_cm: u32,

    /// How long to wait for an echo before reporting no reading.
    pub echo_timeout_us: u32,
}

impl Default for RangeWatchConfig {
    fn default() -> Self {
        Self {
            period_ms: 200,
            priority: 0,
            enabled: true,
            threshold_cm: 20,
            echo_timeout_us: 30_000,
        }
    }
}

/// Tuning for the climate task (temperature/humidity sampling).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClimateConfig {
    pub period_ms: u64,
    pub priority: u8,
    pub enabled: bool,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            period_ms: 2_000,
            priority: 1,
            enabled: true,
        }
    }
}

/// Tuning for the blink task (liveness LED).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlinkConfig {
    pub period_ms: u64,
    pub priority: u8,
    pub enabled: bool,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            period_ms: 1_000,
            priority: 2,
            enabled: true,
        }
    }
}

// ── Top-level config ──────────────────────────────────────────────────────────

/// Root of the YAML file.  All sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub range_watch: RangeWatchConfig,
    pub climate: ClimateConfig,
    pub blink: BlinkConfig,
}

impl BenchConfig {
    /// Load a configuration from a YAML file.
    ///
    /// An empty file means "no overrides" and yields the stock defaults;
    /// a YAML empty document is null, not a mapping, so it needs its own
    /// branch.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        if raw.trim().is_empty() {
            info!(path = %path.display(), "config file is empty, using stock defaults");
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("cannot parse config file {}", path.display()))?;
        info!(path = %path.display(), "loaded bench configuration");
        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
