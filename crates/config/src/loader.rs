use crate::error::{ConfigError, ValidationResult};
use crate::schema::validate;
use crate::types::Config;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const DEFAULT_JSON: &str = include_str!("../../../assets/ssh2iterm.default.json");

/// Returns the default settings file path (~/.ssh2iterm.json).
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh2iterm.json"))
}

/// Writes the default settings to `path` unless a file is already there.
///
/// Returns `true` if a file was created.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn ensure_config_exists(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }

    fs::write(path, DEFAULT_JSON).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(true)
}

/// Loads settings from a string.
///
/// Validates against the schema first, then deserializes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or fails schema validation.
pub fn load_from_str(s: &str) -> Result<Config, ConfigError> {
    s.parse()
}

/// Loads settings from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the settings are invalid.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

/// Loads settings from the default path (~/.ssh2iterm.json).
///
/// Returns `None` if the file doesn't exist (caller should use defaults).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or the file is invalid.
pub fn load() -> Result<Option<Config>, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoHomeDir)?;

    if !path.exists() {
        return Ok(None);
    }

    load_from_path(&path).map(Some)
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;

        if let ValidationResult::Invalid(errors) = validate(&value) {
            return Err(ConfigError::ValidationFailed(errors));
        }

        Ok(serde_json::from_value(value)?)
    }
}
