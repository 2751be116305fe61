//! Portfolio item domain model.
//!
//! A [`PortfolioItem`] is one photograph on the page. Items are supplied once at
//! startup as an ordered sequence and are never created, mutated, or destroyed
//! while the page is mounted.

use serde::{Deserialize, Serialize};

/// A single photograph in the portfolio.
///
/// # Fields
///
/// - `id`: Unique positive integer, used as the stable key of the record
/// - `src`: Opaque resource locator, resolved only by the host's asset loader
/// - `settings`: Display-only caption (lens, aperture, body)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub src: String,
    #[serde(default)]
    pub settings: String,
}

impl PortfolioItem {
    /// Creates a new portfolio item.
    ///
    /// No validation happens here; the catalog loader checks ids and locators
    /// when the sequence is assembled.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::PortfolioItem;
    ///
    /// let item = PortfolioItem::new(1, "/images/cave.jpg", "24mm • f/11");
    /// assert_eq!(item.id, 1);
    /// assert_eq!(item.src, "/images/cave.jpg");
    /// ```
    #[must_use]
    pub fn new(id: u32, src: impl Into<String>, settings: impl Into<String>) -> Self {
        Self {
            id,
            src: src.into(),
            settings: settings.into(),
        }
    }
}
