//! Viewport classification.
//!
//! Derives the "compact layout" signal from the reported display width. The
//! host reports the width once at mount and again on every resize event; the
//! computation is constant-time and idempotent, so no debouncing is applied.

use serde::Serialize;

/// Width below which the page switches to the compact (carousel) layout.
pub const DEFAULT_BREAKPOINT: u32 = 768;

/// Returns `true` when `width` falls below `breakpoint`.
///
/// # Example
///
/// ```
/// use folio::gallery::viewport::{classify, DEFAULT_BREAKPOINT};
///
/// assert!(classify(767, DEFAULT_BREAKPOINT));
/// assert!(!classify(768, DEFAULT_BREAKPOINT));
/// ```
#[must_use]
pub const fn classify(width: u32, breakpoint: u32) -> bool {
    width < breakpoint
}

/// Last reported viewport width and the layout derived from it.
///
/// `is_compact` is never set directly; it is always recomputed from the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewportState {
    /// Most recent width, `None` until the host reports one.
    pub width: Option<u32>,
    /// Derived compact-layout flag.
    pub is_compact: bool,
    breakpoint: u32,
}

impl ViewportState {
    /// Creates an unmeasured viewport. Until a width arrives the layout is wide.
    #[must_use]
    pub const fn new(breakpoint: u32) -> Self {
        Self {
            width: None,
            is_compact: false,
            breakpoint,
        }
    }

    /// Records a new width and recomputes the layout.
    ///
    /// Returns `true` if the compact flag flipped, which is the only case in
    /// which the presentation needs to change.
    pub fn update(&mut self, width: u32) -> bool {
        let was_compact = self.is_compact;
        let first_measure = self.width.is_none();

        self.width = Some(width);
        self.is_compact = classify(width, self.breakpoint);

        tracing::trace!(width, is_compact = self.is_compact, "viewport classified");
        first_measure || was_compact != self.is_compact
    }

    /// Breakpoint this viewport classifies against.
    #[must_use]
    pub const fn breakpoint(&self) -> u32 {
        self.breakpoint
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(classify(767, 768));
        assert!(!classify(768, 768));
        assert!(classify(0, 768));
    }

    #[test]
    fn first_measurement_always_reports_change() {
        let mut viewport = ViewportState::default();
        assert!(viewport.update(1200));
        assert!(!viewport.is_compact);
        assert_eq!(viewport.width, Some(1200));
    }

    #[test]
    fn resize_within_same_layout_is_quiet() {
        let mut viewport = ViewportState::default();
        viewport.update(1200);
        assert!(!viewport.update(1000));
        assert_eq!(viewport.width, Some(1000));
        assert!(viewport.update(500));
        assert!(viewport.is_compact);
    }

    #[test]
    fn custom_breakpoint() {
        let mut viewport = ViewportState::new(1024);
        viewport.update(900);
        assert!(viewport.is_compact);
        assert_eq!(viewport.breakpoint(), 1024);
    }
}
