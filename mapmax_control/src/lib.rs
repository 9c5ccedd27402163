// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mapmax_control --heading-base-level=0

//! Mapmax Control: maximize/restore capability for embedded map widgets.
//!
//! A map widget embedded in a page sometimes wants to take over the whole
//! viewport, and later give it back, leaving the page exactly as it found
//! it. This crate provides that capability as a standalone controller plus a
//! one-glyph button control, composed alongside the host widget rather than
//! mixed into its type.
//!
//! - [`MaximizeController`]: a guarded two-state machine. `maximize`
//!   snapshots the page scroll offset and the body and container inline
//!   styles, then overwrites them with fixed full-viewport rules and marks
//!   the container with [`MAXIMIZED_CLASS`]; `restore` reapplies every
//!   snapshot byte-for-byte and discards it. Both directions are no-ops when
//!   already there.
//! - [`MaximizeButton`]: a stateless dispatch shim that mounts into the host
//!   chrome and toggles the controller when activated.
//! - [`MaximizedStateChanged`]: typed notification carrying the resulting
//!   state, emitted as the last sub-step of every transition.
//! - [`MaximizeOptions`] / [`ControlOptions`]: plain options with builders.
//!
//! The controller reaches the host exclusively through the traits in
//! [`mapmax_surface`]; any environment that can read and replace two inline
//! styles, scroll the page, and toggle one class can host it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use mapmax_control::{MaximizeController, MaximizeOptions};
//! use mapmax_surface::{InlineStyle, MapSurface};
//! use mapmax_surface_ref::RefSurface;
//!
//! let mut surface = RefSurface::new()
//!     .with_body_style(InlineStyle::new("color:red"))
//!     .with_scroll_offset(Point::new(0.0, 420.0));
//! let mut ctrl = MaximizeController::new(MaximizeOptions::default());
//!
//! ctrl.toggle_maximized(&mut surface);
//! assert!(ctrl.is_maximized());
//! assert_eq!(surface.scroll_offset(), Point::ZERO);
//!
//! ctrl.toggle_maximized(&mut surface);
//! assert!(!ctrl.is_maximized());
//! assert_eq!(surface.body_style(), Some(InlineStyle::new("color:red")));
//! assert_eq!(surface.scroll_offset(), Point::new(0.0, 420.0));
//! ```
//!
//! ## Escape handling
//!
//! Keyboard input is typed via [`ui-events`](ui_events): feed
//! [`MaximizeController::handle_keyboard_event`] (or
//! [`MaximizeController::handle_key`]) from your event loop and a released
//! Escape restores the widget while maximized, gated by
//! [`MaximizeOptions::restore_from_maximized_on_esc`]. The check is
//! state-guarded, so it can never fire in the normal state and repeated
//! maximize calls cannot double-arm it.
//!
//! ## Notification ordering
//!
//! Within one transition the sub-steps run synchronously in a fixed order,
//! and the state flip, host size invalidation, and listener notification
//! always come last, so a listener observes fully-updated host state.
//! Listeners receive only the event payload, so toggling the same controller
//! from inside one of its listeners is not representable.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod button;
mod controller;
mod events;
mod options;

pub use button::{CONTROL_BUTTON_CLASS, CONTROL_CONTAINER_CLASS, MaximizeButton};
pub use controller::{
    MAXIMIZED_BODY_STYLE, MAXIMIZED_CLASS, MAXIMIZED_CONTAINER_STYLE, MaximizeController,
};
pub use events::{ListenerId, MaximizedStateChanged};
pub use options::{ControlOptions, MaximizeOptions};
