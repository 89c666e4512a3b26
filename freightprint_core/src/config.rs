//! Configuration file support for Freightprint.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/freightprint/config.toml`.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub factors: FactorsConfig,
}

/// Input and event-log locations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    #[serde(default = "default_event_log")]
    pub event_log: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            event_log: default_event_log(),
        }
    }
}

/// Overrides for the built-in emission factor table (grams per ton-km)
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct FactorsConfig {
    #[serde(default)]
    pub overrides: HashMap<String, f64>,
}

// Default value functions
fn default_input_path() -> PathBuf {
    PathBuf::from("logistics_data.csv")
}

fn default_event_log() -> PathBuf {
    PathBuf::from("freightprint_events.jsonl")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("freightprint").join("config.toml")
    }
}
