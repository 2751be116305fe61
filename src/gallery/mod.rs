//! Gallery state holders.
//!
//! The three cooperating pieces of the portfolio page, each mutated only by
//! its own transitions:
//!
//! - [`viewport`]: compact-layout classification from the display width
//! - [`navigator`]: current slide index, wrapping or clamping at the edges
//! - [`overlay`]: lightbox and menu state machines with scoped side effects
//!
//! Supporting pieces:
//!
//! - [`gesture`]: drag-release to page-turn mapping
//! - [`preload`]: per-index loaded flags for adjacent-resource preloading
//! - [`scope`]: the [`PageHost`](scope::PageHost) seam and its RAII guards

pub mod gesture;
pub mod navigator;
pub mod overlay;
pub mod preload;
pub mod scope;
pub mod viewport;

pub use gesture::{SwipeGesture, DEFAULT_SWIPE_THRESHOLD};
pub use navigator::{Direction, NavigatorKind, NavigatorState};
pub use overlay::{CloseReason, OverlayController};
pub use preload::{LoadStatus, PreloadCache};
pub use scope::{PageHost, RecordingHost};
pub use viewport::{classify, ViewportState, DEFAULT_BREAKPOINT};
