// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control-attachment surface of the host chrome.

use alloc::string::String;

/// A corner of the widget chrome a control can mount into.
///
/// The host library lays out its control chrome by corner; [`Self::as_str`]
/// yields the conventional key the host expects.
///
/// ```
/// use mapmax_surface::ControlCorner;
///
/// assert_eq!(ControlCorner::default(), ControlCorner::TopLeft);
/// assert_eq!(ControlCorner::BottomRight.as_str(), "bottomright");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlCorner {
    /// The top-left chrome corner.
    #[default]
    TopLeft,
    /// The top-right chrome corner.
    TopRight,
    /// The bottom-left chrome corner.
    BottomLeft,
    /// The bottom-right chrome corner.
    BottomRight,
}

impl ControlCorner {
    /// The host chrome's key for this corner.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
        }
    }
}

/// Everything a chrome needs to realize a single glyph-button control.
///
/// The descriptor is plain data; how it becomes a clickable element (and how its
/// activation is wired back to a controller) is the adapter's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlDesc {
    /// Class list for the control's outer container element.
    pub container_class: String,
    /// Class for the clickable button element itself.
    pub button_class: String,
    /// Glyph text rendered inside the button.
    pub glyph: String,
    /// Tooltip title for the button.
    pub title: String,
}

/// The host's control-attachment mechanism.
///
/// Mounting places a control described by a [`ControlDesc`] into the chrome
/// corner the control asked for. Activation wiring is adapter-specific: a DOM
/// chrome attaches a click listener to the node it creates, a recording
/// chrome just logs the mount.
pub trait ControlChrome {
    /// Mounts a control into the given chrome corner.
    fn mount_control(&mut self, corner: ControlCorner, desc: &ControlDesc);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_keys_match_host_convention() {
        assert_eq!(ControlCorner::TopLeft.as_str(), "topleft");
        assert_eq!(ControlCorner::TopRight.as_str(), "topright");
        assert_eq!(ControlCorner::BottomLeft.as_str(), "bottomleft");
        assert_eq!(ControlCorner::BottomRight.as_str(), "bottomright");
    }

    #[test]
    fn default_corner_is_top_left() {
        assert_eq!(ControlCorner::default(), ControlCorner::TopLeft);
    }
}
