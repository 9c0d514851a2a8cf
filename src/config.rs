use std::{fs, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Name of the configuration file, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Settings read from `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Turn on debug output for every command.
    #[serde(deserialize_with = "null_as_default")]
    pub verbose: bool,
    /// Required by every command. Checked by the dispatcher, not here.
    #[serde(deserialize_with = "null_as_default")]
    pub api_key: String,
    /// Maximum number of entries to fetch. Zero means unset.
    #[serde(deserialize_with = "null_as_default")]
    pub max_pages: i64,
}

/// A JSON `null` leaves the field at its zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
