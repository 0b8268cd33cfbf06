use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::SpendlogError;

const CONFIG_FILE: &str = "spendlog.toml";
const DATA_FILE_ENV: &str = "SPENDLOG_FILE";

#[derive(Debug, Deserialize)]
pub struct SpendlogConfig {
    #[serde(default = "default_currency")]
    pub currency: char,
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_currency() -> char {
    '$'
}

fn default_data_file() -> PathBuf {
    PathBuf::from("expenses.json")
}

impl Default for SpendlogConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            data_file: default_data_file(),
        }
    }
}

/// Reads `spendlog.toml` from the current directory, falling back to defaults
/// if it does not exist. `SPENDLOG_FILE` overrides the data file path either way.
pub fn parse_config() -> Result<SpendlogConfig, SpendlogError> {
    let cur_dir = std::env::current_dir()?;
    let config_path = cur_dir.join(CONFIG_FILE);

    let mut config = if config_path.exists() {
        log::debug!("Config file found at {}", config_path.display());
        let config = std::fs::read_to_string(config_path)?;
        toml::from_str(&config)?
    } else {
        SpendlogConfig::default()
    };

    if let Ok(path) = std::env::var(DATA_FILE_ENV) {
        config.data_file = PathBuf::from(path);
    }
    Ok(config)
}
