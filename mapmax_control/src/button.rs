// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The maximize button control.

use alloc::string::ToString;

use mapmax_surface::{ControlChrome, ControlCorner, ControlDesc, MapSurface};

use crate::controller::MaximizeController;
use crate::options::ControlOptions;

/// Class list of the control's outer container element.
pub const CONTROL_CONTAINER_CLASS: &str = "mapmax-control mapmax-bar";

/// Class of the clickable button element.
pub const CONTROL_BUTTON_CLASS: &str = "mapmax-control-maximize-button";

/// Glyph rendered inside the button (U+2750).
const GLYPH: &str = "\u{2750}";

/// A single-glyph button that toggles the owning widget's maximized state.
///
/// The button holds no state of its own; it is purely a dispatch shim. It
/// describes itself to the chrome as a [`ControlDesc`] and, when activated,
/// forwards to [`MaximizeController::toggle_maximized`]. Suppressing the
/// activation event's default action (browser navigation for an anchor
/// element) is the adapter's duty, alongside the rest of the event wiring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaximizeButton {
    options: ControlOptions,
}

impl MaximizeButton {
    /// Creates a button with the given control options.
    pub fn new(options: ControlOptions) -> Self {
        Self { options }
    }

    /// The options this button was constructed with.
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// The chrome corner this button mounts into.
    pub fn corner(&self) -> ControlCorner {
        self.options.corner
    }

    /// Describes the button to a chrome.
    pub fn desc(&self) -> ControlDesc {
        ControlDesc {
            container_class: CONTROL_CONTAINER_CLASS.to_string(),
            button_class: CONTROL_BUTTON_CLASS.to_string(),
            glyph: GLYPH.to_string(),
            title: self.options.title.clone(),
        }
    }

    /// Mounts the button into the host chrome at its configured corner.
    pub fn mount(&self, chrome: &mut impl ControlChrome) {
        chrome.mount_control(self.corner(), &self.desc());
    }

    /// The activation path: toggles the controller's maximized state.
    pub fn activate(
        &self,
        controller: &mut MaximizeController,
        surface: &mut impl MapSurface,
    ) {
        controller.toggle_maximized(surface);
    }
}

impl Default for MaximizeButton {
    fn default() -> Self {
        Self::new(ControlOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapmax_surface_ref::RefSurface;

    use crate::options::MaximizeOptions;

    #[test]
    fn desc_reflects_options() {
        let button = MaximizeButton::new(
            ControlOptions::default()
                .with_title("Full screen")
                .with_corner(ControlCorner::BottomRight),
        );

        let desc = button.desc();
        assert_eq!(desc.title, "Full screen");
        assert_eq!(desc.glyph, "\u{2750}");
        assert_eq!(button.corner(), ControlCorner::BottomRight);
    }

    #[test]
    fn mount_places_desc_at_configured_corner() {
        let mut surface = RefSurface::new();
        let button =
            MaximizeButton::new(ControlOptions::default().with_corner(ControlCorner::TopRight));

        button.mount(&mut surface);

        assert_eq!(
            surface.mounted_controls(),
            &[(ControlCorner::TopRight, button.desc())]
        );
    }

    #[test]
    fn activation_toggles_the_controller() {
        let mut surface = RefSurface::new();
        let mut ctrl = MaximizeController::new(MaximizeOptions::default());
        let button = MaximizeButton::default();

        button.activate(&mut ctrl, &mut surface);
        assert!(ctrl.is_maximized());

        button.activate(&mut ctrl, &mut surface);
        assert!(!ctrl.is_maximized());
    }
}
