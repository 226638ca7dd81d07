//! Settings management for dialtip dials.
//!
//! This crate loads the user's dial and tooltip tuning from a TOML file and
//! turns it into a [`dialtip_core::DialConfig`].
//!
//! # Features
//!
//! - **Settings file**: `[timing]`, `[dial]` and `[tooltip]` sections, all optional
//! - **Validation**: Rejects zero or negative scales and empty tooltips
//! - **Paths**: Platform-specific config directory
//!
//! # Example
//!
//! ```rust,no_run
//! use dialtip_config::{Settings, default_settings_path};
//!
//! let settings = Settings::load(default_settings_path()).unwrap_or_default();
//! let config = settings.dial_config();
//! assert!(config.sensitivity.drag > 0.0);
//!
//! let mut tuned = settings.clone();
//! tuned.timing.hover_delay_ms = 300;
//! tuned.save(default_settings_path()).unwrap();
//! ```

mod error;
mod settings;

/// Platform-specific paths for the settings file.
pub mod paths;

/// Settings validation.
pub mod validation;

pub use error::ConfigError;
pub use paths::{
    LoadOutcome, default_settings_path, ensure_user_config_dir, load_from, load_or_default,
    user_config_dir,
};
pub use settings::{DialSettings, Settings, TimingSettings, TooltipSettings};
pub use validation::{ValidationError, ValidationResult, validate_settings};
