//! Optional TOML configuration for the `slots` binary.
//!
//! ```toml
//! slot_minutes = 30
//! merge_slots = true
//! log_level = "info"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use slot_engine::{AvailabilityOptions, SlotDuration, DEFAULT_SLOT_MINUTES};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub slot_minutes: i64,
    pub merge_slots: bool,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_SLOT_MINUTES,
            merge_slots: true,
            log_level: None,
        }
    }
}

impl CliConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load from `path`, or use defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path))?;
                Self::from_toml(&content).with_context(|| format!("Invalid config file: {}", path))
            }
            None => Ok(Self::default()),
        }
    }

    /// Engine options, with command-line overrides applied.
    pub fn options(&self, slot_minutes: Option<i64>, no_merge: bool) -> Result<AvailabilityOptions> {
        let minutes = slot_minutes.unwrap_or(self.slot_minutes);
        let slot = SlotDuration::new(minutes).context("Invalid slot length")?;
        Ok(AvailabilityOptions {
            slot,
            merge: self.merge_slots && !no_merge,
        })
    }
}
