//! User interface layer with component-based rendering.
//!
//! This module turns page state into frames: a serialisable view model for
//! any presentation layer, and an ANSI text rendering of it for terminals.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → PageViewModel → render → ANSI text | JSON
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable page state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable page component renderers
//! - [`helpers`]: Shared rendering utilities (canvas, wrapping, framing)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel, FrameFormat};
pub use theme::Theme;
pub use viewmodel::{
    AboutView, CarouselView, FooterView, GalleryView, GridTile, HeaderView, HeroView, LightboxView,
    LinkView, MenuView, PageViewModel, TileSpan,
};
