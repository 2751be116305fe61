//! Layout modes, page sections and the page variant configuration.
//!
//! The page exists in one parameterised implementation. [`PageVariant`]
//! captures every knob that differed between the historical page variants:
//! which navigator drives the carousel, whether the compact layout offers a
//! hamburger menu, where the compact breakpoint sits, how confident a swipe
//! must be, and whether the two overlays exclude each other.
//!
//! [`LayoutMode`] is derived from the viewport on every view-model
//! computation and is never stored on its own.
//!
//! # Example
//!
//! ```rust
//! use folio::app::modes::{LayoutMode, PageVariant};
//! use folio::gallery::NavigatorKind;
//!
//! let variant = PageVariant {
//!     navigator: NavigatorKind::Wrapping,
//!     menu_enabled: false,
//!     ..PageVariant::default()
//! };
//! assert_eq!(variant.breakpoint, 768);
//! assert_eq!(LayoutMode::from_compact(true), LayoutMode::Compact);
//! ```

use crate::gallery::{NavigatorKind, DEFAULT_BREAKPOINT, DEFAULT_SWIPE_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Responsive layout of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Narrow viewport: single-slide carousel, compact lightbox, hamburger menu.
    Compact,

    /// Wide viewport: masonry grid, full lightbox, inline navigation links.
    Full,
}

impl LayoutMode {
    /// Maps the viewport classifier output onto a layout.
    #[must_use]
    pub const fn from_compact(is_compact: bool) -> Self {
        if is_compact {
            Self::Compact
        } else {
            Self::Full
        }
    }

    /// Returns `true` for [`LayoutMode::Compact`].
    #[must_use]
    pub const fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}

/// Anchored sections of the page reachable from the navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// The gallery.
    Work,
    /// The photographer's biography.
    About,
    /// The contact mail link.
    Contact,
}

impl Section {
    /// All sections in header order.
    pub const ALL: [Self; 3] = [Self::Work, Self::About, Self::Contact];

    /// Label shown in the header and the menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Parses a section name, case-insensitively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio::app::modes::Section;
    ///
    /// assert_eq!(Section::from_name("About"), Some(Section::About));
    /// assert_eq!(Section::from_name("blog"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "work" | "gallery" => Some(Self::Work),
            "about" => Some(Self::About),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-deployment behaviour of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageVariant {
    /// Boundary behaviour of the carousel.
    pub navigator: NavigatorKind,

    /// Whether the compact layout offers the hamburger menu.
    pub menu_enabled: bool,

    /// Widths strictly below this value use the compact layout.
    pub breakpoint: u32,

    /// Minimum absolute swipe confidence needed to paginate.
    pub swipe_threshold: f64,

    /// Opening one overlay closes the other.
    pub exclusive_overlays: bool,
}

impl Default for PageVariant {
    fn default() -> Self {
        Self {
            navigator: NavigatorKind::default(),
            menu_enabled: true,
            breakpoint: DEFAULT_BREAKPOINT,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            exclusive_overlays: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_names_round_trip_through_labels() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.label()), Some(section));
        }
        assert_eq!(Section::from_name("  WORK "), Some(Section::Work));
    }

    #[test]
    fn default_variant_matches_the_gesture_page() {
        let variant = PageVariant::default();
        assert_eq!(variant.navigator, NavigatorKind::Clamping);
        assert!(variant.menu_enabled);
        assert!(variant.exclusive_overlays);
        assert!((variant.swipe_threshold - 10_000.0).abs() < f64::EPSILON);
    }
}
