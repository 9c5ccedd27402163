// Copyright 2026 the Mapmax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque inline-style snapshots.

use alloc::string::String;
use core::fmt;

/// An element's full inline `style` attribute, captured as one opaque value.
///
/// The text is never parsed or normalized; whatever was captured is what a
/// later restore writes back. Equality is therefore byte equality.
///
/// An *absent* attribute is represented outside this type, as
/// `Option<InlineStyle>`: `None` means the element carried no inline style at
/// all, which restores to removing the attribute rather than writing an empty
/// one.
///
/// ```
/// use mapmax_surface::InlineStyle;
///
/// let style = InlineStyle::new("color:red");
/// assert_eq!(style.as_str(), "color:red");
/// assert_eq!(style, InlineStyle::from("color:red"));
/// assert!(!style.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InlineStyle(String);

impl InlineStyle {
    /// Creates a snapshot from raw style text.
    pub fn new(rules: impl Into<String>) -> Self {
        Self(rules.into())
    }

    /// The raw style text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the snapshot holds an empty (but present) attribute.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the snapshot, returning the raw style text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for InlineStyle {
    fn from(rules: &str) -> Self {
        Self::new(rules)
    }
}

impl From<String> for InlineStyle {
    fn from(rules: String) -> Self {
        Self(rules)
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn round_trips_exact_text() {
        let text = "position:absolute; top : 0 ;;custom-prop:var(--x)";
        let style = InlineStyle::new(text);
        assert_eq!(style.as_str(), text);
        assert_eq!(style.into_string(), text);
    }

    #[test]
    fn empty_attribute_is_distinct_from_absent() {
        let present_but_empty = Some(InlineStyle::new(""));
        let absent: Option<InlineStyle> = None;
        assert_ne!(present_but_empty, absent);
        assert!(present_but_empty.unwrap().is_empty());
    }

    #[test]
    fn display_matches_raw_text() {
        let style = InlineStyle::from("overflow:hidden");
        assert_eq!(style.to_string(), "overflow:hidden");
    }
}
