// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mapmax_surface_ref --heading-base-level=0

//! Mapmax Reference Surface.
//!
//! This crate provides a small, stateful implementation of
//! [`MapSurface`] and [`ControlChrome`] for **state tracking and operation
//! tracing**.
//!
//! It is intentionally *not* a browser shim:
//! - It does **not** model a DOM or cascade any styles.
//! - It applies each operation to plain fields and records a typed [`Event`]
//!   in application order, so tests can assert both on the resulting state
//!   and on the exact sub-step sequence a controller performed.
//!
//! ```
//! use kurbo::Point;
//! use mapmax_surface::{InlineStyle, MapSurface};
//! use mapmax_surface_ref::{Event, RefSurface};
//!
//! let mut surface = RefSurface::new().with_body_style(InlineStyle::new("color:red"));
//!
//! surface.scroll_to(Point::ZERO);
//! surface.set_body_style(Some(&InlineStyle::new("overflow:hidden")));
//!
//! assert_eq!(surface.body_style(), Some(InlineStyle::new("overflow:hidden")));
//! assert!(matches!(surface.events()[0], Event::ScrollTo { .. }));
//! assert!(matches!(surface.events()[1], Event::SetBodyStyle { .. }));
//! ```

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::Point;
use mapmax_surface::{ControlChrome, ControlCorner, ControlDesc, InlineStyle, MapSurface};

/// Operation recorded by the reference surface, in application order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The container's inline style was replaced (`None` removed it).
    SetContainerStyle {
        /// The style that was written.
        style: Option<InlineStyle>,
    },
    /// The body's inline style was replaced (`None` removed it).
    SetBodyStyle {
        /// The style that was written.
        style: Option<InlineStyle>,
    },
    /// The page was scrolled.
    ScrollTo {
        /// The offset that was scrolled to.
        offset: Point,
    },
    /// A class was added to the container.
    AddContainerClass {
        /// The class name.
        name: String,
    },
    /// A class was removed from the container.
    RemoveContainerClass {
        /// The class name.
        name: String,
    },
    /// The host was asked to recompute its size.
    InvalidateSize,
    /// A control was mounted into the chrome.
    MountControl {
        /// The chrome corner the control was mounted into.
        corner: ControlCorner,
        /// The mounted control's descriptor.
        desc: ControlDesc,
    },
}

/// Simple reference implementation of the map surface.
///
/// This surface:
/// - Stores the container and body inline styles, the scroll offset, and the
///   container's class set as plain fields,
/// - Records a high-level [`Event`] for every mutating operation,
/// - Remembers mounted controls so chrome attachment is assertable.
#[derive(Debug, Default)]
pub struct RefSurface {
    container_style: Option<InlineStyle>,
    body_style: Option<InlineStyle>,
    scroll: Point,
    classes: HashSet<String>,
    controls: Vec<(ControlCorner, ControlDesc)>,

    /// Log of operations in the order they were applied.
    events: Vec<Event>,
}

impl RefSurface {
    /// Creates a surface with no inline styles, no classes, and scroll (0, 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the container's initial inline style.
    pub fn with_container_style(mut self, style: InlineStyle) -> Self {
        self.container_style = Some(style);
        self
    }

    /// Seeds the body's initial inline style.
    pub fn with_body_style(mut self, style: InlineStyle) -> Self {
        self.body_style = Some(style);
        self
    }

    /// Seeds the initial page scroll offset.
    pub fn with_scroll_offset(mut self, offset: Point) -> Self {
        self.scroll = offset;
        self
    }

    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Clears recorded events but keeps the surface state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Whether the container currently carries the given class.
    pub fn has_container_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Controls mounted into the chrome, in mount order.
    pub fn mounted_controls(&self) -> &[(ControlCorner, ControlDesc)] {
        &self.controls
    }
}

impl MapSurface for RefSurface {
    fn container_style(&self) -> Option<InlineStyle> {
        self.container_style.clone()
    }

    fn set_container_style(&mut self, style: Option<&InlineStyle>) {
        self.container_style = style.cloned();
        self.events.push(Event::SetContainerStyle {
            style: style.cloned(),
        });
    }

    fn body_style(&self) -> Option<InlineStyle> {
        self.body_style.clone()
    }

    fn set_body_style(&mut self, style: Option<&InlineStyle>) {
        self.body_style = style.cloned();
        self.events.push(Event::SetBodyStyle {
            style: style.cloned(),
        });
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn scroll_to(&mut self, offset: Point) {
        self.scroll = offset;
        self.events.push(Event::ScrollTo { offset });
    }

    fn add_container_class(&mut self, name: &str) {
        self.classes.insert(name.to_string());
        self.events.push(Event::AddContainerClass {
            name: name.to_string(),
        });
    }

    fn remove_container_class(&mut self, name: &str) {
        self.classes.remove(name);
        self.events.push(Event::RemoveContainerClass {
            name: name.to_string(),
        });
    }

    fn invalidate_size(&mut self) {
        self.events.push(Event::InvalidateSize);
    }
}

impl ControlChrome for RefSurface {
    fn mount_control(&mut self, corner: ControlCorner, desc: &ControlDesc) {
        self.controls.push((corner, desc.clone()));
        self.events.push(Event::MountControl {
            corner,
            desc: desc.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn style_writes_replace_and_remove() {
        let mut surface = RefSurface::new().with_container_style(InlineStyle::new("width:50%"));

        surface.set_container_style(Some(&InlineStyle::new("position:absolute")));
        assert_eq!(
            surface.container_style(),
            Some(InlineStyle::new("position:absolute"))
        );

        surface.set_container_style(None);
        assert_eq!(surface.container_style(), None);
    }

    #[test]
    fn body_style_is_independent_of_container_style() {
        let mut surface = RefSurface::new();

        surface.set_body_style(Some(&InlineStyle::new("overflow:hidden")));

        assert_eq!(surface.container_style(), None);
        assert_eq!(surface.body_style(), Some(InlineStyle::new("overflow:hidden")));
    }

    #[test]
    fn scroll_round_trip() {
        let mut surface = RefSurface::new().with_scroll_offset(Point::new(120.0, 340.0));
        assert_eq!(surface.scroll_offset(), Point::new(120.0, 340.0));

        surface.scroll_to(Point::ZERO);
        assert_eq!(surface.scroll_offset(), Point::ZERO);
    }

    #[test]
    fn class_add_and_remove_are_idempotent() {
        let mut surface = RefSurface::new();

        surface.add_container_class("maximized");
        surface.add_container_class("maximized");
        assert!(surface.has_container_class("maximized"));

        surface.remove_container_class("maximized");
        surface.remove_container_class("maximized");
        assert!(!surface.has_container_class("maximized"));
    }

    #[test]
    fn events_record_application_order() {
        let mut surface = RefSurface::new();

        surface.scroll_to(Point::ZERO);
        surface.set_body_style(Some(&InlineStyle::new("overflow:hidden")));
        surface.invalidate_size();

        assert_eq!(
            surface.events(),
            &[
                Event::ScrollTo { offset: Point::ZERO },
                Event::SetBodyStyle {
                    style: Some(InlineStyle::new("overflow:hidden")),
                },
                Event::InvalidateSize,
            ]
        );

        surface.clear_events();
        assert!(surface.events().is_empty());
        assert_eq!(surface.body_style(), Some(InlineStyle::new("overflow:hidden")));
    }

    #[test]
    fn mounted_controls_are_remembered() {
        let mut surface = RefSurface::new();
        let desc = ControlDesc {
            container_class: "mapmax-control".to_string(),
            button_class: "mapmax-control-maximize-button".to_string(),
            glyph: "\u{2750}".to_string(),
            title: "Maximize map".to_string(),
        };

        surface.mount_control(ControlCorner::TopLeft, &desc);

        assert_eq!(surface.mounted_controls(), &[(ControlCorner::TopLeft, desc)]);
    }
}
