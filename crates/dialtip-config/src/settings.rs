//! Settings file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use dialtip_core::{DialConfig, DialSensitivity, Size, TooltipLayout, TooltipTiming};

use crate::error::ConfigError;
use crate::validation::validate_settings;

/// User-tunable dial and tooltip behavior.
///
/// Every section and field is optional in the file; missing entries take
/// the stock values.
///
/// # TOML Format
///
/// ```toml
/// [timing]
/// hover_delay_ms = 500
/// fast_reshow_delay_ms = 100
/// recent_grace_ms = 200
///
/// [dial]
/// drag = 200.0
/// wheel = 25.0
/// precision_drag_factor = 10.0
/// precision_wheel_factor = 5.0
/// secondary_button_factor = 3.0
///
/// [tooltip]
/// width = 286.0
/// height = 200.0
/// pointer_margin = 20.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Tooltip delays.
    pub timing: TimingSettings,
    /// Gesture scaling.
    pub dial: DialSettings,
    /// Tooltip panel geometry.
    pub tooltip: TooltipSettings,
}

/// `[timing]` section, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingSettings {
    /// Hover time before a tooltip appears.
    pub hover_delay_ms: u64,
    /// Hover time right after another tooltip was dismissed.
    pub fast_reshow_delay_ms: u64,
    /// How long a dismissed tooltip keeps the fast path open.
    pub recent_grace_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self::from(TooltipTiming::default())
    }
}

impl From<TooltipTiming> for TimingSettings {
    fn from(timing: TooltipTiming) -> Self {
        let ms = |d: Duration| u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        Self {
            hover_delay_ms: ms(timing.hover_delay),
            fast_reshow_delay_ms: ms(timing.fast_reshow_delay),
            recent_grace_ms: ms(timing.recent_grace),
        }
    }
}

impl From<TimingSettings> for TooltipTiming {
    fn from(settings: TimingSettings) -> Self {
        Self {
            hover_delay: Duration::from_millis(settings.hover_delay_ms),
            fast_reshow_delay: Duration::from_millis(settings.fast_reshow_delay_ms),
            recent_grace: Duration::from_millis(settings.recent_grace_ms),
        }
    }
}

/// `[dial]` section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DialSettings {
    /// Drag pixels (doubled displacement) per full range.
    pub drag: f64,
    /// Wheel notches per full range.
    pub wheel: f64,
    /// Drag slow-down with Ctrl held.
    pub precision_drag_factor: f64,
    /// Wheel slow-down with Ctrl held.
    pub precision_wheel_factor: f64,
    /// Drag slow-down with the secondary button.
    pub secondary_button_factor: f64,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self::from(DialSensitivity::default())
    }
}

impl From<DialSensitivity> for DialSettings {
    fn from(s: DialSensitivity) -> Self {
        Self {
            drag: s.drag,
            wheel: s.wheel,
            precision_drag_factor: s.precision_drag_factor,
            precision_wheel_factor: s.precision_wheel_factor,
            secondary_button_factor: s.secondary_button_factor,
        }
    }
}

impl From<DialSettings> for DialSensitivity {
    fn from(s: DialSettings) -> Self {
        Self {
            drag: s.drag,
            wheel: s.wheel,
            precision_drag_factor: s.precision_drag_factor,
            precision_wheel_factor: s.precision_wheel_factor,
            secondary_button_factor: s.secondary_button_factor,
        }
    }
}

/// `[tooltip]` section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TooltipSettings {
    /// Panel width.
    pub width: f32,
    /// Panel height.
    pub height: f32,
    /// Vertical gap between the pointer and the panel.
    pub pointer_margin: f32,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self::from(TooltipLayout::default())
    }
}

impl From<TooltipLayout> for TooltipSettings {
    fn from(layout: TooltipLayout) -> Self {
        Self {
            width: layout.size.width,
            height: layout.size.height,
            pointer_margin: layout.pointer_margin,
        }
    }
}

impl From<TooltipSettings> for TooltipLayout {
    fn from(s: TooltipSettings) -> Self {
        Self {
            size: Size::new(s.width, s.height),
            pointer_margin: s.pointer_margin,
        }
    }
}

impl Settings {
    /// Load and validate settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save the settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values a dial cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_settings(self)?;
        Ok(())
    }

    /// The runtime configuration these settings describe.
    pub fn dial_config(&self) -> DialConfig {
        DialConfig {
            timing: self.timing.into(),
            sensitivity: self.dial.into(),
            layout: self.tooltip.into(),
        }
    }
}

impl From<DialConfig> for Settings {
    fn from(config: DialConfig) -> Self {
        Self {
            timing: config.timing.into(),
            dial: config.sensitivity.into(),
            tooltip: config.layout.into(),
        }
    }
}
