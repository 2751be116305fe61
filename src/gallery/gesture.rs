//! Drag-release classification for the carousel.
//!
//! A horizontal drag release reports a signed offset and a signed velocity.
//! Their product (with the offset taken as an absolute value) is the swipe
//! confidence; only releases whose confidence clears the threshold turn the
//! page, everything else snaps back to the current slide.

use super::navigator::Direction;

/// Confidence a release must exceed to count as an intentional swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 10_000.0;

/// Horizontal drag release as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    /// Signed displacement from the drag origin.
    pub offset: f64,
    /// Signed speed at release.
    pub velocity: f64,
}

impl SwipeGesture {
    #[must_use]
    pub const fn new(offset: f64, velocity: f64) -> Self {
        Self { offset, velocity }
    }

    /// `|offset| * velocity`.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.offset.abs() * self.velocity
    }

    /// Direction to paginate in, or `None` when the release should snap back.
    ///
    /// A strongly negative confidence (flick towards the left) advances; a
    /// strongly positive one goes back. Non-finite inputs never paginate.
    ///
    /// # Example
    ///
    /// ```
    /// use folio::gallery::gesture::{SwipeGesture, DEFAULT_SWIPE_THRESHOLD};
    /// use folio::gallery::navigator::Direction;
    ///
    /// let flick = SwipeGesture::new(50.0, 300.0);
    /// assert_eq!(flick.direction(DEFAULT_SWIPE_THRESHOLD), Some(Direction::Backward));
    ///
    /// let nudge = SwipeGesture::new(5.0, 10.0);
    /// assert_eq!(nudge.direction(DEFAULT_SWIPE_THRESHOLD), None);
    /// ```
    #[must_use]
    pub fn direction(&self, threshold: f64) -> Option<Direction> {
        let confidence = self.confidence();
        if confidence < -threshold {
            Some(Direction::Forward)
        } else if confidence > threshold {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}
