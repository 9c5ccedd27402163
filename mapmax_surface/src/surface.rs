// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The map-widget surface consumed by a maximize controller.

use kurbo::Point;

use crate::style::InlineStyle;

/// Host state a maximize/restore cycle reads and mutates.
///
/// Implementations wrap a concrete environment: the widget's container
/// element, the page body, and the page scroll position. The controller
/// drives this trait in a fixed sub-step order and relies on two contracts:
///
/// - Style reads return the *full* current inline style, `None` when the
///   attribute is absent; style writes replace the whole attribute, and
///   writing `None` removes it. A read followed by a write of the read value
///   must leave the element byte-identical.
/// - All operations apply synchronously. Nothing here can fail; an
///   environment quirk (such as a missing legacy scroll property) is the
///   implementation's job to paper over with a fallback, not to surface as an
///   error.
pub trait MapSurface {
    /// The widget container's full inline style, `None` when absent.
    fn container_style(&self) -> Option<InlineStyle>;

    /// Replaces the widget container's inline style; `None` removes the
    /// attribute.
    fn set_container_style(&mut self, style: Option<&InlineStyle>);

    /// The page body's full inline style, `None` when absent.
    fn body_style(&self) -> Option<InlineStyle>;

    /// Replaces the page body's inline style; `None` removes the attribute.
    fn set_body_style(&mut self, style: Option<&InlineStyle>);

    /// The current page scroll offset in CSS pixels.
    fn scroll_offset(&self) -> Point;

    /// Scrolls the page to the given offset.
    fn scroll_to(&mut self, offset: Point);

    /// Adds a CSS class to the widget container. Adding a class that is
    /// already present is a no-op.
    fn add_container_class(&mut self, name: &str);

    /// Removes a CSS class from the widget container. Removing a class that
    /// is not present is a no-op.
    fn remove_container_class(&mut self, name: &str);

    /// Asks the host widget to recompute its size after a layout change.
    fn invalidate_size(&mut self);
}
