// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration options for the maximize capability.

use alloc::string::String;
use alloc::string::ToString;

use mapmax_surface::ControlCorner;

/// Options for the maximize button control.
///
/// ```
/// use mapmax_control::ControlOptions;
/// use mapmax_surface::ControlCorner;
///
/// let options = ControlOptions::default().with_corner(ControlCorner::TopRight);
/// assert_eq!(options.title, "Maximize map");
/// assert_eq!(options.corner, ControlCorner::TopRight);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlOptions {
    /// Tooltip title of the button.
    pub title: String,
    /// Chrome corner the button mounts into.
    pub corner: ControlCorner,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            title: "Maximize map".to_string(),
            corner: ControlCorner::TopLeft,
        }
    }
}

impl ControlOptions {
    /// Sets the tooltip title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the chrome corner.
    pub fn with_corner(mut self, corner: ControlCorner) -> Self {
        self.corner = corner;
        self
    }
}

/// Options for the maximize capability as a whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaximizeOptions {
    /// Build and mount a [`MaximizeButton`](crate::MaximizeButton) during
    /// [`MaximizeController::install`](crate::MaximizeController::install).
    pub maximize_control: bool,
    /// Restore from the maximized state when Escape is released.
    pub restore_from_maximized_on_esc: bool,
    /// Options forwarded to the button control.
    pub control: ControlOptions,
}

impl Default for MaximizeOptions {
    fn default() -> Self {
        Self {
            maximize_control: false,
            restore_from_maximized_on_esc: true,
            control: ControlOptions::default(),
        }
    }
}

impl MaximizeOptions {
    /// Sets whether a button control is auto-mounted on install.
    pub fn with_maximize_control(mut self, enabled: bool) -> Self {
        self.maximize_control = enabled;
        self
    }

    /// Sets whether releasing Escape restores from the maximized state.
    pub fn with_restore_from_maximized_on_esc(mut self, enabled: bool) -> Self {
        self.restore_from_maximized_on_esc = enabled;
        self
    }

    /// Sets the button control options.
    pub fn with_control(mut self, control: ControlOptions) -> Self {
        self.control = control;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = MaximizeOptions::default();
        assert!(!options.maximize_control);
        assert!(options.restore_from_maximized_on_esc);
        assert_eq!(options.control.title, "Maximize map");
        assert_eq!(options.control.corner, ControlCorner::TopLeft);
    }

    #[test]
    fn builders_override_fields() {
        let options = MaximizeOptions::default()
            .with_maximize_control(true)
            .with_restore_from_maximized_on_esc(false)
            .with_control(ControlOptions::default().with_title("Full screen"));

        assert!(options.maximize_control);
        assert!(!options.restore_from_maximized_on_esc);
        assert_eq!(options.control.title, "Full screen");
    }
}
