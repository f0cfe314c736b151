use crate::book::DEFAULT_LOOKAHEAD_DAYS;
use crate::error::{RolodexError, Result};
use crate::model::LeapDayPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// Configuration for rolodex, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// How many days ahead `birthdays` looks, counting from today
    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,

    /// Where Feb 29 birthdays land in years without a Feb 29
    #[serde(default)]
    pub leap_day: LeapDayPolicy,
}

fn default_lookahead_days() -> u32 {
    DEFAULT_LOOKAHEAD_DAYS
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }
}
