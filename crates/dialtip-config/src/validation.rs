//! Settings validation.
//!
//! Parsing only checks types; this module rejects values that would make a
//! dial unusable, such as a zero drag sensitivity (division by zero) or a
//! tooltip with no area.
//!
//! # Example
//!
//! ```rust
//! use dialtip_config::{Settings, validate_settings};
//!
//! let mut settings = Settings::default();
//! assert!(validate_settings(&settings).is_ok());
//!
//! settings.dial.wheel = -1.0;
//! assert!(validate_settings(&settings).is_err());
//! ```

use thiserror::Error;

use crate::settings::Settings;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A divisor or scale that must be strictly positive.
    #[error("{field} must be positive (got {value})")]
    NonPositive {
        /// Dotted path of the field, e.g. `dial.drag`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A length that must be zero or more.
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Dotted path of the field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn positive(field: &'static str, value: f64, errors: &mut Vec<ValidationError>) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(ValidationError::NonPositive { field, value });
    }
}

fn non_negative(field: &'static str, value: f64, errors: &mut Vec<ValidationError>) {
    if !(value.is_finite() && value >= 0.0) {
        errors.push(ValidationError::Negative { field, value });
    }
}

/// Check every field of `settings`, reporting all problems at once.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    let mut errors = Vec::new();

    let dial = &settings.dial;
    positive("dial.drag", dial.drag, &mut errors);
    positive("dial.wheel", dial.wheel, &mut errors);
    positive(
        "dial.precision_drag_factor",
        dial.precision_drag_factor,
        &mut errors,
    );
    positive(
        "dial.precision_wheel_factor",
        dial.precision_wheel_factor,
        &mut errors,
    );
    positive(
        "dial.secondary_button_factor",
        dial.secondary_button_factor,
        &mut errors,
    );

    let tooltip = &settings.tooltip;
    positive("tooltip.width", f64::from(tooltip.width), &mut errors);
    positive("tooltip.height", f64::from(tooltip.height), &mut errors);
    non_negative(
        "tooltip.pointer_margin",
        f64::from(tooltip.pointer_margin),
        &mut errors,
    );

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(validate_settings(&Settings::default()), Ok(()));
    }

    #[test]
    fn single_error_is_reported_directly() {
        let mut settings = Settings::default();
        settings.dial.drag = 0.0;
        assert_eq!(
            validate_settings(&settings),
            Err(ValidationError::NonPositive {
                field: "dial.drag",
                value: 0.0
            })
        );
    }

    #[test]
    fn nan_is_rejected() {
        let mut settings = Settings::default();
        settings.dial.precision_wheel_factor = f64::NAN;
        assert!(matches!(
            validate_settings(&settings),
            Err(ValidationError::NonPositive {
                field: "dial.precision_wheel_factor",
                ..
            })
        ));
    }

    #[test]
    fn zero_margin_is_allowed() {
        let mut settings = Settings::default();
        settings.tooltip.pointer_margin = 0.0;
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn several_errors_are_collected() {
        let mut settings = Settings::default();
        settings.tooltip.width = 0.0;
        settings.tooltip.height = -5.0;
        settings.tooltip.pointer_margin = -1.0;
        let Err(ValidationError::Multiple(errors)) = validate_settings(&settings) else {
            panic!("expected multiple errors");
        };
        assert_eq!(errors.len(), 3);
        assert!(matches!(
            errors[2],
            ValidationError::Negative {
                field: "tooltip.pointer_margin",
                ..
            }
        ));

        let msg = ValidationError::Multiple(errors).to_string();
        assert!(msg.starts_with("multiple validation errors: tooltip.width"));
    }
}
