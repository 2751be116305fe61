//! Gallery navigation state.
//!
//! [`NavigatorState`] owns the current index into the item sequence. It is a
//! small `Copy` value and every transition consumes it and returns the next
//! state, so the handler can compare before and after to decide whether
//! anything observable changed.
//!
//! # Variants
//!
//! - [`NavigatorKind::Wrapping`]: previous/next wrap around at both ends. Used
//!   when navigation happens through explicit arrow and dot controls.
//! - [`NavigatorKind::Clamping`]: previous/next stop at the edges. Used for the
//!   drag-driven carousel, where reaching an edge hides the chevron on that side.
//!
//! Absolute jumps ([`NavigatorState::go_to`]) behave identically in both
//! variants: out-of-range requests are ignored.

use serde::{Deserialize, Serialize};

/// Boundary behavior of the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigatorKind {
    /// Wraps at both ends.
    Wrapping,
    /// Stops at both ends.
    #[default]
    Clamping,
}

impl NavigatorKind {
    /// Parses a configuration value (`"wrapping"` or `"clamping"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "wrapping" | "wrap" => Some(Self::Wrapping),
            "clamping" | "clamp" => Some(Self::Clamping),
            _ => None,
        }
    }
}

/// Relative navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards index 0.
    Backward,
    /// Towards the last index.
    Forward,
}

/// Current position within the item sequence.
///
/// Invariant: `current_index < item_count` whenever `item_count > 0`; with no
/// items the index stays at 0 and every transition is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigatorState {
    kind: NavigatorKind,
    current_index: usize,
    item_count: usize,
}

impl NavigatorState {
    /// Creates a navigator positioned on the first item.
    #[must_use]
    pub const fn new(kind: NavigatorKind, item_count: usize) -> Self {
        Self {
            kind,
            current_index: 0,
            item_count,
        }
    }

    /// Index of the item currently shown.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of items being navigated.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Boundary behavior of this navigator.
    #[must_use]
    pub const fn kind(&self) -> NavigatorKind {
        self.kind
    }

    /// Returns `true` when there is nothing to navigate.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Moves one item forward according to the variant's boundary rule.
    #[must_use]
    pub fn next(self) -> Self {
        self.step(Direction::Forward)
    }

    /// Moves one item backward according to the variant's boundary rule.
    #[must_use]
    pub fn previous(self) -> Self {
        self.step(Direction::Backward)
    }

    /// Moves one item in `direction`, wrapping or clamping per [`NavigatorKind`].
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match self.kind {
            NavigatorKind::Wrapping => self.wrap(direction),
            NavigatorKind::Clamping => self.paginate(direction),
        }
    }

    /// Moves one item in `direction` only if the target stays in range.
    ///
    /// At an edge this is a no-op regardless of the navigator's variant.
    #[must_use]
    pub fn paginate(self, direction: Direction) -> Self {
        let target = match direction {
            Direction::Forward => self.current_index.checked_add(1),
            Direction::Backward => self.current_index.checked_sub(1),
        };

        match target {
            Some(index) if index < self.item_count => Self {
                current_index: index,
                ..self
            },
            _ => self,
        }
    }

    /// Jumps to `index` if it is in range; otherwise leaves the state untouched.
    #[must_use]
    pub fn go_to(self, index: usize) -> Self {
        if index < self.item_count {
            Self {
                current_index: index,
                ..self
            }
        } else {
            self
        }
    }

    /// Whether a backward move would change the index.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.step(Direction::Backward) != *self
    }

    /// Whether a forward move would change the index.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.step(Direction::Forward) != *self
    }

    /// Indices whose resources should be warm: the current one, then the next
    /// and previous with wraparound, without duplicates.
    ///
    /// The window always wraps, even for the clamping variant, so the last
    /// slide also warms the first one.
    #[must_use]
    pub fn preload_window(&self) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }

        let n = self.item_count;
        let i = self.current_index;
        let mut window = Vec::with_capacity(3);
        for index in [i, (i + 1) % n, (i + n - 1) % n] {
            if !window.contains(&index) {
                window.push(index);
            }
        }
        window
    }

    fn wrap(self, direction: Direction) -> Self {
        if self.is_empty() {
            return self;
        }

        let n = self.item_count;
        let current_index = match direction {
            Direction::Forward => (self.current_index + 1) % n,
            Direction::Backward => (self.current_index + n - 1) % n,
        };
        Self {
            current_index,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(kind: NavigatorKind, count: usize, index: usize) -> NavigatorState {
        NavigatorState::new(kind, count).go_to(index)
    }

    #[test]
    fn wrapping_next_wraps_at_end() {
        let nav = at(NavigatorKind::Wrapping, 8, 7);
        assert_eq!(nav.next().current_index(), 0);
    }

    #[test]
    fn wrapping_previous_wraps_at_start() {
        let nav = NavigatorState::new(NavigatorKind::Wrapping, 8);
        assert_eq!(nav.previous().current_index(), 7);
    }

    #[test]
    fn wrapping_sequences_stay_in_range() {
        let mut nav = NavigatorState::new(NavigatorKind::Wrapping, 5);
        let moves = [true, true, false, false, false, true, false, false, false, false, true];
        for forward in moves.iter().cycle().take(200) {
            nav = if *forward { nav.next() } else { nav.previous() };
            assert!(nav.current_index() < 5);
        }
    }

    #[test]
    fn clamping_stops_at_both_edges() {
        let last = at(NavigatorKind::Clamping, 4, 3);
        assert_eq!(last.paginate(Direction::Forward), last);
        assert_eq!(last.next(), last);

        let first = NavigatorState::new(NavigatorKind::Clamping, 4);
        assert_eq!(first.paginate(Direction::Backward), first);
        assert_eq!(first.previous(), first);
    }

    #[test]
    fn clamping_affordances_follow_edges() {
        let first = NavigatorState::new(NavigatorKind::Clamping, 3);
        assert!(!first.can_go_back());
        assert!(first.can_go_forward());

        let last = first.go_to(2);
        assert!(last.can_go_back());
        assert!(!last.can_go_forward());
    }

    #[test]
    fn wrapping_affordances_need_two_items() {
        let single = NavigatorState::new(NavigatorKind::Wrapping, 1);
        assert!(!single.can_go_back());
        assert!(!single.can_go_forward());

        let pair = NavigatorState::new(NavigatorKind::Wrapping, 2);
        assert!(pair.can_go_back());
        assert!(pair.can_go_forward());
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let nav = at(NavigatorKind::Wrapping, 3, 1);
        assert_eq!(nav.go_to(3), nav);
        assert_eq!(nav.go_to(usize::MAX), nav);
    }

    #[test]
    fn go_to_current_is_identity() {
        let nav = at(NavigatorKind::Clamping, 6, 4);
        assert_eq!(nav.go_to(4), nav);
    }

    #[test]
    fn empty_navigator_ignores_everything() {
        for kind in [NavigatorKind::Wrapping, NavigatorKind::Clamping] {
            let nav = NavigatorState::new(kind, 0);
            assert_eq!(nav.next(), nav);
            assert_eq!(nav.previous(), nav);
            assert_eq!(nav.go_to(0), nav);
            assert!(nav.preload_window().is_empty());
        }
    }

    #[test]
    fn preload_window_wraps_and_dedups() {
        assert_eq!(at(NavigatorKind::Clamping, 10, 0).preload_window(), vec![0, 1, 9]);
        assert_eq!(at(NavigatorKind::Clamping, 10, 9).preload_window(), vec![9, 0, 8]);
        assert_eq!(at(NavigatorKind::Wrapping, 2, 0).preload_window(), vec![0, 1]);
        assert_eq!(NavigatorState::new(NavigatorKind::Wrapping, 1).preload_window(), vec![0]);
    }

    #[test]
    fn kind_names_parse() {
        assert_eq!(NavigatorKind::from_name("Wrapping"), Some(NavigatorKind::Wrapping));
        assert_eq!(NavigatorKind::from_name(" clamp "), Some(NavigatorKind::Clamping));
        assert_eq!(NavigatorKind::from_name("loop"), None);
    }
}
