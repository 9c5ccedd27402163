// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mapmax_surface --heading-base-level=0

//! Mapmax Surface: the host-surface boundary for the maximize capability.
//!
//! A maximize controller never talks to a mapping library or a document
//! directly. Everything it needs from the embedding environment is expressed
//! here as two small traits plus the opaque value types that cross them:
//!
//! - [`MapSurface`]: the widget container, the page body, and the page scroll
//!   position: the pieces of host state a maximize/restore cycle snapshots
//!   and mutates.
//! - [`ControlChrome`]: the host's control-attachment mechanism, keyed by a
//!   [`ControlCorner`], into which a button control mounts its
//!   [`ControlDesc`].
//! - [`InlineStyle`]: an element's full inline style captured as one opaque
//!   value. Snapshots round-trip byte-exactly; nothing in this stack parses
//!   or diffs style text.
//!
//! ## Why whole-attribute snapshots
//!
//! The host page's original inline styling is not otherwise known to the
//! capability, so a restore must reapply exactly what was captured. Capturing
//! the whole attribute (and `None` when the attribute is absent) makes the
//! round trip exact by construction; saving only the properties about to be
//! overwritten silently discards any other inline styling the page applied.
//!
//! ## Example
//!
//! ```
//! use mapmax_surface::InlineStyle;
//!
//! let saved = InlineStyle::new("color:red;width:50%");
//! // ... overwrite the element's style, do work, then restore `saved` ...
//! assert_eq!(saved.as_str(), "color:red;width:50%");
//! ```
//!
//! Adapters implement the traits for a concrete environment: a DOM adapter
//! binds them to real elements, while a reference implementation applies the
//! operations to plain fields and records them for tests.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chrome;
mod style;
mod surface;

pub use chrome::{ControlChrome, ControlCorner, ControlDesc};
pub use style::InlineStyle;
pub use surface::MapSurface;
