//! Preference persistence.
//!
//! Loads and saves the board's display preferences as a single TOML file
//! under the platform config directory. Board contents are deliberately not
//! persisted; only presentation preferences go to disk.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

const PREFS_FILE: &str = "prefs.toml";

/// Error type for preference operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to determine the config directory
    NoConfigDir,
    /// IO error while reading/writing the preferences file
    Io(io::Error),
    /// Failed to parse the preferences file
    Parse(toml::de::Error),
    /// Failed to serialize preferences
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

/// Path of the preferences file, if a config directory exists on this host
pub fn prefs_path() -> Option<PathBuf> {
    ProjectDirs::from("io", "zone-board", "zone-board")
        .map(|dirs| dirs.config_dir().join(PREFS_FILE))
}

/// Load the saved preferences.
///
/// Returns `None` if no preferences file exists yet.
/// Returns an error if the file exists but can't be parsed.
pub fn load_prefs<T: DeserializeOwned>() -> Result<Option<T>, ConfigError> {
    let path = prefs_path().ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let prefs: T = toml::from_str(&contents)?;
    Ok(Some(prefs))
}

/// Save the preferences, creating the config directory if needed
pub fn save_prefs<T: Serialize>(prefs: &T) -> Result<(), ConfigError> {
    let path = prefs_path().ok_or(ConfigError::NoConfigDir)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(prefs)?;
    fs::write(&path, contents)?;
    Ok(())
}
