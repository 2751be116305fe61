//! Domain layer for the Folio gallery engine.
//!
//! Core types shared by every other layer, independent of any host or
//! rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: The portfolio item record
//! - [`site`]: Static page copy around the gallery

pub mod error;
pub mod item;
pub mod site;

pub use error::{FolioError, Result};
pub use item::PortfolioItem;
pub use site::SiteInfo;
