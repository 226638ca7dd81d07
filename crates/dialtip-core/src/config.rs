//! Tunable constants for the dial and its tooltip.
//!
//! Timing values are host policy, so nothing here is hard-wired to a
//! particular toolkit. The defaults are this crate's own choice:
//!
//! | Setting               | Default |
//! |-----------------------|---------|
//! | hover delay           | 500 ms  |
//! | fast re-show delay    | 100 ms  |
//! | recentness grace      | 200 ms  |
//! | drag sensitivity      | 200     |
//! | wheel sensitivity     | 25      |
//! | tooltip size          | 286×200 |
//! | tooltip margin        | 20 px   |

use core::time::Duration;

use crate::geometry::Size;

/// When the tooltip appears and how long "recently shown" lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipTiming {
    /// Delay before showing on hover when no tooltip was shown recently.
    pub hover_delay: Duration,
    /// Delay before showing on hover right after another tooltip was visible.
    pub fast_reshow_delay: Duration,
    /// How long after hiding a tooltip the fast path stays available.
    pub recent_grace: Duration,
}

impl Default for TooltipTiming {
    fn default() -> Self {
        Self {
            hover_delay: Duration::from_millis(500),
            fast_reshow_delay: Duration::from_millis(100),
            recent_grace: Duration::from_millis(200),
        }
    }
}

/// Pointer-to-value scaling.
///
/// A larger sensitivity means more pointer travel for the same value change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialSensitivity {
    /// Displacement units for a full-range drag.
    pub drag: f64,
    /// Wheel notches for a full-range scroll.
    pub wheel: f64,
    /// Drag multiplier under the precision modifier.
    pub precision_drag_factor: f64,
    /// Wheel multiplier under the precision modifier.
    pub precision_wheel_factor: f64,
    /// Drag multiplier when dragging with the secondary button.
    pub secondary_button_factor: f64,
}

impl Default for DialSensitivity {
    fn default() -> Self {
        Self {
            drag: 200.0,
            wheel: 25.0,
            precision_drag_factor: 10.0,
            precision_wheel_factor: 5.0,
            secondary_button_factor: 3.0,
        }
    }
}

/// Tooltip overlay geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipLayout {
    /// Overlay size.
    pub size: Size,
    /// Vertical gap between the pointer and the overlay.
    pub pointer_margin: f32,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            size: Size::new(286.0, 200.0),
            pointer_margin: 20.0,
        }
    }
}

/// Everything a dial needs to know about its behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialConfig {
    /// Tooltip timing.
    pub timing: TooltipTiming,
    /// Drag and wheel scaling.
    pub sensitivity: DialSensitivity,
    /// Overlay geometry.
    pub layout: TooltipLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_is_not_slower_than_hover() {
        let t = TooltipTiming::default();
        assert!(t.fast_reshow_delay <= t.hover_delay);
    }

    #[test]
    fn default_sensitivity_factors() {
        let s = DialSensitivity::default();
        assert_eq!(s.drag * s.precision_drag_factor, 2000.0);
        assert_eq!(s.wheel * s.precision_wheel_factor, 125.0);
        assert_eq!(s.drag * s.secondary_button_factor, 600.0);
    }
}
