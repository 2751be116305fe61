//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (the driver binary, or any embedding
//! presentation layer) and the gallery state holders. It implements the
//! event-driven loop that powers the page.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Transitions → Actions → Side Effects
//!                            ↑                                   ↓
//!                            └────────── Loader Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and transition sequencing
//! - [`modes`]: Layout, section and page variant types
//! - [`state`]: Central page state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{LayoutMode, PageVariant, Section};
pub use state::AppState;
