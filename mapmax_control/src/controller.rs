// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The maximize/restore state machine.

use core::fmt;

use kurbo::Point;
use mapmax_surface::{ControlChrome, InlineStyle, MapSurface};
use ui_events::keyboard::{Key, KeyState, KeyboardEvent, NamedKey};

use crate::button::MaximizeButton;
use crate::events::{ListenerId, Listeners, MaximizedStateChanged};
use crate::options::MaximizeOptions;

/// Marker class carried by the widget container while maximized.
///
/// Page stylesheets can hook this class for further custom styling.
pub const MAXIMIZED_CLASS: &str = "mapmax-maximized";

/// Inline style written to the page body while maximized.
pub const MAXIMIZED_BODY_STYLE: &str = "overflow:hidden;height:100%;margin:0;padding:0;border:0";

/// Inline style written to the widget container while maximized: an
/// absolutely positioned, zero-margin/padding/border box pinned to all four
/// viewport edges.
pub const MAXIMIZED_CONTAINER_STYLE: &str =
    "position:absolute;width:100%;height:100%;top:0;right:0;bottom:0;left:0;margin:0;padding:0;border:0";

/// Everything needed to undo one maximize transition.
///
/// Held only while maximized and dropped as part of the restore transition,
/// so a stale snapshot can never leak into a later cycle.
#[derive(Clone, Debug, PartialEq)]
struct RestoreState {
    container_style: Option<InlineStyle>,
    body_style: Option<InlineStyle>,
    scroll_offset: Point,
}

/// Toggles a map widget between its embedded layout and a full-viewport
/// overlay layout.
///
/// The controller is constructed alongside the widget and drives the host
/// exclusively through [`MapSurface`]; it never holds the host itself. Both
/// transitions are guarded: maximizing while maximized and restoring while
/// normal are no-ops that touch nothing and notify nobody.
///
/// Sub-steps of a transition run synchronously in a fixed order, with the
/// state flip, the host size invalidation, and the
/// [`MaximizedStateChanged`] notification always after all surface
/// mutations, so a listener observes fully-updated host state.
///
/// Listeners receive only the event payload, never the controller or the
/// surface, so a listener cannot reenter `toggle_maximized` on the instance
/// that is mid-transition.
pub struct MaximizeController {
    options: MaximizeOptions,
    /// Present exactly while maximized; doubles as the state flag.
    restore: Option<RestoreState>,
    listeners: Listeners,
}

impl MaximizeController {
    /// Creates a controller in the normal (non-maximized) state.
    pub fn new(options: MaximizeOptions) -> Self {
        Self {
            options,
            restore: None,
            listeners: Listeners::new(),
        }
    }

    /// Creates a controller and, when
    /// [`maximize_control`](MaximizeOptions::maximize_control) is set, builds
    /// a button control and mounts it into the host chrome.
    ///
    /// The mounted button is returned so the embedder can wire its activation
    /// (see [`MaximizeButton::activate`]).
    pub fn install<H: MapSurface + ControlChrome>(
        host: &mut H,
        options: MaximizeOptions,
    ) -> (Self, Option<MaximizeButton>) {
        let button = options
            .maximize_control
            .then(|| MaximizeButton::new(options.control.clone()));
        if let Some(button) = &button {
            button.mount(host);
        }
        (Self::new(options), button)
    }

    /// The options this controller was constructed with.
    pub fn options(&self) -> &MaximizeOptions {
        &self.options
    }

    /// Returns `true` while the widget is maximized.
    pub fn is_maximized(&self) -> bool {
        self.restore.is_some()
    }

    /// Maximizes the widget. No-op if already maximized.
    ///
    /// In order: snapshot the page scroll offset and scroll to the origin;
    /// snapshot the body style and overwrite it with
    /// [`MAXIMIZED_BODY_STYLE`]; snapshot the container style and overwrite
    /// it with [`MAXIMIZED_CONTAINER_STYLE`]; add [`MAXIMIZED_CLASS`]; flip
    /// to maximized; invalidate the host size; notify listeners.
    pub fn maximize(&mut self, surface: &mut impl MapSurface) {
        if self.is_maximized() {
            return;
        }

        let scroll_offset = surface.scroll_offset();
        surface.scroll_to(Point::ZERO);

        let body_style = surface.body_style();
        surface.set_body_style(Some(&InlineStyle::new(MAXIMIZED_BODY_STYLE)));

        let container_style = surface.container_style();
        surface.set_container_style(Some(&InlineStyle::new(MAXIMIZED_CONTAINER_STYLE)));

        surface.add_container_class(MAXIMIZED_CLASS);

        self.restore = Some(RestoreState {
            container_style,
            body_style,
            scroll_offset,
        });
        self.finish_transition(surface, true);
    }

    /// Restores the widget's embedded layout. No-op if not maximized.
    ///
    /// In order: reapply the saved container style verbatim; reapply the
    /// saved body style verbatim; reapply the saved scroll offset; discard
    /// the snapshot (which is also the flip back to normal); remove
    /// [`MAXIMIZED_CLASS`]; invalidate the host size; notify listeners.
    pub fn restore(&mut self, surface: &mut impl MapSurface) {
        let Some(saved) = &self.restore else {
            return;
        };

        surface.set_container_style(saved.container_style.as_ref());
        surface.set_body_style(saved.body_style.as_ref());
        surface.scroll_to(saved.scroll_offset);

        // The snapshot is spent; dropping it is the flip back to normal.
        self.restore = None;

        surface.remove_container_class(MAXIMIZED_CLASS);
        self.finish_transition(surface, false);
    }

    /// Restores when maximized, maximizes otherwise.
    pub fn toggle_maximized(&mut self, surface: &mut impl MapSurface) {
        if self.is_maximized() {
            self.restore(surface);
        } else {
            self.maximize(surface);
        }
    }

    /// Feeds a key transition to the controller.
    ///
    /// Releasing Escape while maximized toggles back to normal, provided
    /// [`restore_from_maximized_on_esc`](MaximizeOptions::restore_from_maximized_on_esc)
    /// is enabled. Any other key, a key press, or any key while not
    /// maximized is ignored.
    pub fn handle_key(&mut self, surface: &mut impl MapSurface, key: &Key, state: KeyState) {
        if !self.options.restore_from_maximized_on_esc || !self.is_maximized() {
            return;
        }
        if *key == Key::Named(NamedKey::Escape) && !state.is_down() {
            self.toggle_maximized(surface);
        }
    }

    /// Feeds a full keyboard event to the controller.
    ///
    /// Convenience over [`Self::handle_key`] for embedders that already hold
    /// a [`KeyboardEvent`].
    pub fn handle_keyboard_event(
        &mut self,
        surface: &mut impl MapSurface,
        event: &KeyboardEvent,
    ) {
        self.handle_key(surface, &event.key, event.state);
    }

    /// Subscribes a listener to [`MaximizedStateChanged`] notifications.
    pub fn on_state_change(
        &mut self,
        listener: impl FnMut(&MaximizedStateChanged) + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Removes a previously subscribed listener. Returns `false` when the id
    /// is unknown (already removed).
    pub fn remove_state_change_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Tail shared by both transitions: the host recomputes its size against
    /// the new layout, then listeners observe the settled state.
    fn finish_transition(&mut self, surface: &mut impl MapSurface, maximized: bool) {
        surface.invalidate_size();
        self.listeners.emit(&MaximizedStateChanged { maximized });
    }
}

impl fmt::Debug for MaximizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaximizeController")
            .field("options", &self.options)
            .field("restore", &self.restore)
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use mapmax_surface_ref::{Event, RefSurface};

    use crate::options::ControlOptions;

    fn controller() -> MaximizeController {
        MaximizeController::new(MaximizeOptions::default())
    }

    #[test]
    fn starts_in_normal_state() {
        assert!(!controller().is_maximized());
    }

    #[test]
    fn maximize_then_restore_round_trips_styles_and_scroll() {
        let mut surface = RefSurface::new()
            .with_body_style(InlineStyle::new("color:red"))
            .with_scroll_offset(Point::new(40.0, 260.0));
        let mut ctrl = controller();

        ctrl.maximize(&mut surface);
        ctrl.restore(&mut surface);

        assert!(!ctrl.is_maximized());
        assert_eq!(surface.body_style(), Some(InlineStyle::new("color:red")));
        assert_eq!(surface.container_style(), None);
        assert_eq!(surface.scroll_offset(), Point::new(40.0, 260.0));
    }

    #[test]
    fn absent_and_empty_styles_restore_differently() {
        // Container starts with no style attribute, body with a present but
        // empty one; the round trip must keep that distinction.
        let mut surface = RefSurface::new().with_body_style(InlineStyle::new(""));
        let mut ctrl = controller();

        ctrl.maximize(&mut surface);
        ctrl.restore(&mut surface);

        assert_eq!(surface.container_style(), None);
        assert_eq!(surface.body_style(), Some(InlineStyle::new("")));
    }

    #[test]
    fn maximize_applies_fixed_rules_and_scrolls_to_origin() {
        let mut surface = RefSurface::new().with_scroll_offset(Point::new(7.0, 13.0));
        let mut ctrl = controller();

        ctrl.maximize(&mut surface);

        assert!(ctrl.is_maximized());
        assert_eq!(
            surface.body_style(),
            Some(InlineStyle::new(MAXIMIZED_BODY_STYLE))
        );
        assert_eq!(
            surface.container_style(),
            Some(InlineStyle::new(MAXIMIZED_CONTAINER_STYLE))
        );
        assert_eq!(surface.scroll_offset(), Point::ZERO);
        assert!(surface.has_container_class(MAXIMIZED_CLASS));
    }

    #[test]
    fn maximize_is_idempotent() {
        let mut surface = RefSurface::new().with_container_style(InlineStyle::new("width:50%"));
        let mut ctrl = controller();
        let notifications = Rc::new(RefCell::new(0));
        let n = Rc::clone(&notifications);
        ctrl.on_state_change(move |_| *n.borrow_mut() += 1);

        ctrl.maximize(&mut surface);
        let events_after_first = surface.events().len();
        ctrl.maximize(&mut surface);

        // No second snapshot: the original style still restores.
        assert_eq!(surface.events().len(), events_after_first);
        assert_eq!(*notifications.borrow(), 1);

        ctrl.restore(&mut surface);
        assert_eq!(surface.container_style(), Some(InlineStyle::new("width:50%")));
    }

    #[test]
    fn restore_in_normal_state_is_a_noop() {
        let mut surface = RefSurface::new().with_body_style(InlineStyle::new("color:red"));
        let mut ctrl = controller();
        let notifications = Rc::new(RefCell::new(0));
        let n = Rc::clone(&notifications);
        ctrl.on_state_change(move |_| *n.borrow_mut() += 1);

        ctrl.restore(&mut surface);

        assert!(surface.events().is_empty());
        assert_eq!(*notifications.borrow(), 0);
        assert_eq!(surface.body_style(), Some(InlineStyle::new("color:red")));
    }

    #[test]
    fn toggle_alternates_strictly() {
        let mut surface = RefSurface::new();
        let mut ctrl = controller();

        for n in 1..=6 {
            ctrl.toggle_maximized(&mut surface);
            assert_eq!(ctrl.is_maximized(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn maximize_substeps_run_in_order() {
        let mut surface = RefSurface::new().with_scroll_offset(Point::new(3.0, 5.0));
        let mut ctrl = controller();

        ctrl.maximize(&mut surface);

        assert_eq!(
            surface.events(),
            &[
                Event::ScrollTo { offset: Point::ZERO },
                Event::SetBodyStyle {
                    style: Some(InlineStyle::new(MAXIMIZED_BODY_STYLE)),
                },
                Event::SetContainerStyle {
                    style: Some(InlineStyle::new(MAXIMIZED_CONTAINER_STYLE)),
                },
                Event::AddContainerClass {
                    name: MAXIMIZED_CLASS.into(),
                },
                Event::InvalidateSize,
            ]
        );
    }

    #[test]
    fn restore_substeps_run_in_order() {
        let mut surface = RefSurface::new()
            .with_container_style(InlineStyle::new("height:200px"))
            .with_scroll_offset(Point::new(3.0, 5.0));
        let mut ctrl = controller();
        ctrl.maximize(&mut surface);
        surface.clear_events();

        ctrl.restore(&mut surface);

        assert_eq!(
            surface.events(),
            &[
                Event::SetContainerStyle {
                    style: Some(InlineStyle::new("height:200px")),
                },
                Event::SetBodyStyle { style: None },
                Event::ScrollTo {
                    offset: Point::new(3.0, 5.0),
                },
                Event::RemoveContainerClass {
                    name: MAXIMIZED_CLASS.into(),
                },
                Event::InvalidateSize,
            ]
        );
    }

    #[test]
    fn listeners_observe_settled_state() {
        let mut surface = RefSurface::new();
        let mut ctrl = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        ctrl.on_state_change(move |e| s.borrow_mut().push(e.maximized));

        ctrl.toggle_maximized(&mut surface);
        // The notification is the last sub-step: the event log already ends
        // with the size invalidation when the listener runs.
        assert_eq!(surface.events().last(), Some(&Event::InvalidateSize));

        ctrl.toggle_maximized(&mut surface);
        assert_eq!(&*seen.borrow(), &[true, false]);
    }

    #[test]
    fn removed_listener_misses_later_transitions() {
        let mut surface = RefSurface::new();
        let mut ctrl = controller();
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let id = ctrl.on_state_change(move |_| *c.borrow_mut() += 1);

        ctrl.maximize(&mut surface);
        assert!(ctrl.remove_state_change_listener(id));
        ctrl.restore(&mut surface);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn escape_release_restores_when_enabled() {
        let mut surface = RefSurface::new();
        let mut ctrl = controller();
        ctrl.maximize(&mut surface);

        ctrl.handle_key(
            &mut surface,
            &Key::Named(NamedKey::Escape),
            KeyState::Up,
        );

        assert!(!ctrl.is_maximized());
    }

    #[test]
    fn escape_press_is_ignored() {
        let mut surface = RefSurface::new();
        let mut ctrl = controller();
        ctrl.maximize(&mut surface);

        ctrl.handle_key(
            &mut surface,
            &Key::Named(NamedKey::Escape),
            KeyState::Down,
        );

        assert!(ctrl.is_maximized());
    }

    #[test]
    fn escape_release_is_ignored_when_disabled() {
        let mut surface = RefSurface::new();
        let mut ctrl = MaximizeController::new(
            MaximizeOptions::default().with_restore_from_maximized_on_esc(false),
        );
        ctrl.maximize(&mut surface);

        ctrl.handle_key(
            &mut surface,
            &Key::Named(NamedKey::Escape),
            KeyState::Up,
        );

        assert!(ctrl.is_maximized());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut surface = RefSurface::new();
        let mut ctrl = controller();
        ctrl.maximize(&mut surface);

        ctrl.handle_key(&mut surface, &Key::Named(NamedKey::Enter), KeyState::Up);

        assert!(ctrl.is_maximized());
    }

    #[test]
    fn escape_release_in_normal_state_does_not_maximize() {
        let mut surface = RefSurface::new();
        let mut ctrl = controller();

        ctrl.handle_key(
            &mut surface,
            &Key::Named(NamedKey::Escape),
            KeyState::Up,
        );

        assert!(!ctrl.is_maximized());
        assert!(surface.events().is_empty());
    }

    #[test]
    fn install_mounts_button_only_when_requested() {
        let mut surface = RefSurface::new();
        let (_ctrl, button) =
            MaximizeController::install(&mut surface, MaximizeOptions::default());
        assert!(button.is_none());
        assert!(surface.mounted_controls().is_empty());

        let mut surface = RefSurface::new();
        let options = MaximizeOptions::default()
            .with_maximize_control(true)
            .with_control(ControlOptions::default().with_title("Full screen"));
        let (_ctrl, button) = MaximizeController::install(&mut surface, options);

        let button = button.expect("install should build a button");
        assert_eq!(surface.mounted_controls().len(), 1);
        assert_eq!(surface.mounted_controls()[0].1.title, "Full screen");
        assert_eq!(surface.mounted_controls()[0].1, button.desc());
    }

    #[test]
    fn scenario_color_red_body_round_trip() {
        // Initial body style "color:red", container style "", scroll (15, 80).
        let mut surface = RefSurface::new()
            .with_body_style(InlineStyle::new("color:red"))
            .with_container_style(InlineStyle::new(""))
            .with_scroll_offset(Point::new(15.0, 80.0));
        let mut ctrl = controller();
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let n = Rc::clone(&notifications);
        ctrl.on_state_change(move |e| n.borrow_mut().push(e.maximized));

        ctrl.maximize(&mut surface);
        assert_eq!(
            surface.container_style(),
            Some(InlineStyle::new(MAXIMIZED_CONTAINER_STYLE))
        );
        assert_eq!(
            surface.body_style(),
            Some(InlineStyle::new(MAXIMIZED_BODY_STYLE))
        );
        assert_eq!(surface.scroll_offset(), Point::ZERO);

        ctrl.restore(&mut surface);
        assert_eq!(surface.container_style(), Some(InlineStyle::new("")));
        assert_eq!(surface.body_style(), Some(InlineStyle::new("color:red")));
        assert_eq!(surface.scroll_offset(), Point::new(15.0, 80.0));
        assert!(!surface.has_container_class(MAXIMIZED_CLASS));
        assert_eq!(&*notifications.borrow(), &[true, false]);
    }

    #[test]
    fn second_cycle_snapshots_fresh_state() {
        let mut surface = RefSurface::new().with_body_style(InlineStyle::new("color:red"));
        let mut ctrl = controller();

        ctrl.maximize(&mut surface);
        ctrl.restore(&mut surface);

        // The page restyles the body between cycles; the next restore must
        // reproduce the new styling, not the first cycle's.
        surface.set_body_style(Some(&InlineStyle::new("color:blue")));
        ctrl.maximize(&mut surface);
        ctrl.restore(&mut surface);

        assert_eq!(surface.body_style(), Some(InlineStyle::new("color:blue")));
    }
}
