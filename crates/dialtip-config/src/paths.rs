//! Platform-specific paths for the settings file.
//!
//! - **User config**: `~/.config/dialtip/` (Linux), `~/Library/Application Support/dialtip/` (macOS), `%APPDATA%\dialtip\` (Windows)
//! - **Settings file**: `settings.toml` inside the user config directory
//!
//! # Example
//!
//! ```rust,no_run
//! use dialtip_config::paths;
//!
//! let settings = paths::load_or_default(None);
//! println!("hover delay: {} ms", settings.timing.hover_delay_ms);
//! ```

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::settings::Settings;

/// Application name used for directory paths.
const APP_NAME: &str = "dialtip";

/// File name of the settings file.
const SETTINGS_FILE: &str = "settings.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the default settings file location.
pub fn default_settings_path() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE)
}

/// Ensure the user config directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// What [`load_from`] found.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read and validated.
    Loaded(Settings),
    /// No file exists; defaults apply.
    Missing,
    /// The file exists but is unusable; defaults apply.
    Invalid(ConfigError),
}

impl LoadOutcome {
    /// The settings to run with.
    pub fn into_settings(self) -> Settings {
        match self {
            LoadOutcome::Loaded(settings) => settings,
            LoadOutcome::Missing | LoadOutcome::Invalid(_) => Settings::default(),
        }
    }
}

/// Load settings from `path`, classifying failures.
pub fn load_from(path: &Path) -> LoadOutcome {
    match Settings::load(path) {
        Ok(settings) => LoadOutcome::Loaded(settings),
        Err(e) if e.is_not_found() => LoadOutcome::Missing,
        Err(e) => LoadOutcome::Invalid(e),
    }
}

/// Load from `path` (or the default location), falling back to defaults.
pub fn load_or_default(path: Option<&Path>) -> Settings {
    let default_path;
    let path = match path {
        Some(path) => path,
        None => {
            default_path = default_settings_path();
            &default_path
        }
    };
    load_from(path).into_settings()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn paths_are_named_after_the_app() {
        assert!(user_config_dir().to_string_lossy().contains("dialtip"));
        let file = default_settings_path();
        assert_eq!(file.file_name().unwrap(), "settings.toml");
        assert!(file.starts_with(user_config_dir()));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = load_from(&temp_dir.path().join("absent.toml"));
        assert!(matches!(outcome, LoadOutcome::Missing));
        assert_eq!(outcome.into_settings(), Settings::default());
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "[dial\nwheel = ").unwrap();
        let outcome = load_from(&path);
        assert!(matches!(outcome, LoadOutcome::Invalid(ConfigError::TomlParse(_))));
        assert_eq!(load_or_default(Some(&path)), Settings::default());
    }

    #[test]
    fn valid_file_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "[timing]\nhover_delay_ms = 250\n").unwrap();
        assert_eq!(load_or_default(Some(&path)).timing.hover_delay_ms, 250);
    }
}
