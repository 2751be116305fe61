//! Portfolio catalog loading and validation.
//!
//! The catalog is the fixed, ordered item sequence the page displays. It is
//! read once at startup and never changes afterwards.
//!
//! # Formats
//!
//! The format is chosen by file extension:
//!
//! - `.toml`: a document with `[[items]]` tables
//! - `.json`: either a bare array of items or `{ "items": [...] }`
//!
//! ```toml
//! version = 1
//!
//! [[items]]
//! id = 1
//! src = "/images/prity2.jpg"
//! settings = "50mm • f/1.8 • Sony A7III"
//! ```
//!
//! # Validation
//!
//! Every `id` must be positive and unique, and every `src` non-empty.
//! Order is preserved exactly as supplied. An empty catalog is valid.

use crate::domain::error::{FolioError, Result};
use crate::domain::PortfolioItem;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../../assets/portfolio.toml");

/// Latest catalog document version understood by the loader.
const CATALOG_VERSION: u32 = 1;

/// Top-level catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    /// Document format version, for future migrations.
    #[serde(default = "default_version")]
    version: u32,

    /// Items in display order.
    #[serde(default)]
    items: Vec<PortfolioItem>,
}

const fn default_version() -> u32 {
    CATALOG_VERSION
}

/// JSON catalogs may omit the wrapping document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<PortfolioItem>),
    Document(CatalogDocument),
}

/// Serialisation format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Catalog`] for missing or unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            other => Err(FolioError::Catalog(format!(
                "unsupported catalog extension {other:?} for {}",
                path.display()
            ))),
        }
    }
}

/// Returns the built-in catalog of ten photographs.
///
/// # Panics
///
/// Panics if the embedded catalog fails to parse, which the tests rule out.
#[must_use]
pub fn builtin() -> Vec<PortfolioItem> {
    parse_catalog(BUILTIN_CATALOG, CatalogFormat::Toml)
        .expect("built-in catalog should always parse")
}

/// Reads and validates a catalog file.
///
/// # Errors
///
/// Returns [`FolioError::Io`] if the file cannot be read, and
/// [`FolioError::Catalog`] if it cannot be parsed or fails validation.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use folio::catalog::load_catalog;
///
/// let items = load_catalog(Path::new("portfolio.toml"))?;
/// println!("{} photographs", items.len());
/// # Ok::<(), folio::FolioError>(())
/// ```
pub fn load_catalog(path: &Path) -> Result<Vec<PortfolioItem>> {
    let _span = tracing::debug_span!("load_catalog", path = %path.display()).entered();

    let format = CatalogFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    let items = parse_catalog(&contents, format)?;

    tracing::debug!(item_count = items.len(), "catalog loaded");
    Ok(items)
}

/// Parses and validates catalog text.
///
/// # Errors
///
/// Returns [`FolioError::Catalog`] on syntax errors, unsupported versions
/// or validation failures.
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<Vec<PortfolioItem>> {
    let document = match format {
        CatalogFormat::Toml => toml::from_str::<CatalogDocument>(contents)
            .map_err(|e| FolioError::Catalog(format!("invalid TOML catalog: {e}")))?,
        CatalogFormat::Json => match serde_json::from_str::<JsonCatalog>(contents)
            .map_err(|e| FolioError::Catalog(format!("invalid JSON catalog: {e}")))?
        {
            JsonCatalog::Bare(items) => CatalogDocument {
                version: CATALOG_VERSION,
                items,
            },
            JsonCatalog::Document(document) => document,
        },
    };

    if document.version > CATALOG_VERSION {
        return Err(FolioError::Catalog(format!(
            "catalog version {} is newer than supported version {CATALOG_VERSION}",
            document.version
        )));
    }

    validate(&document.items)?;
    Ok(document.items)
}

/// Checks ids and locators of an item sequence.
///
/// # Errors
///
/// Returns [`FolioError::Catalog`] naming the first offending item.
pub fn validate(items: &[PortfolioItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for (position, item) in items.iter().enumerate() {
        if item.id == 0 {
            return Err(FolioError::Catalog(format!(
                "item at position {position} has id 0; ids must be positive"
            )));
        }
        if !seen.insert(item.id) {
            return Err(FolioError::Catalog(format!("duplicate item id {}", item.id)));
        }
        if item.src.trim().is_empty() {
            return Err(FolioError::Catalog(format!("item {} has an empty src", item.id)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_the_ten_published_photographs() {
        let items = builtin();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].src, "/images/prity2.jpg");
        assert_eq!(items[9].settings, "85mm • f/1.8 • Sony A7III");
        let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn json_accepts_bare_arrays_and_documents() {
        let bare = r#"[{"id": 3, "src": "/c.jpg", "settings": "x"}, {"id": 1, "src": "/a.jpg"}]"#;
        let items = parse_catalog(bare, CatalogFormat::Json).unwrap();
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(items[1].settings, "");

        let document = r#"{"version": 1, "items": [{"id": 7, "src": "/g.jpg", "settings": "y"}]}"#;
        assert_eq!(parse_catalog(document, CatalogFormat::Json).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let items = vec![
            PortfolioItem::new(1, "/a.jpg", ""),
            PortfolioItem::new(1, "/b.jpg", ""),
        ];
        let err = validate(&items).unwrap_err();
        assert!(err.to_string().contains("duplicate item id 1"));
    }

    #[test]
    fn zero_ids_and_empty_sources_are_rejected() {
        assert!(validate(&[PortfolioItem::new(0, "/a.jpg", "")]).is_err());
        assert!(validate(&[PortfolioItem::new(4, "  ", "")]).is_err());
    }

    #[test]
    fn negative_ids_fail_to_parse() {
        let toml = "[[items]]\nid = -2\nsrc = \"/a.jpg\"\n";
        assert!(matches!(
            parse_catalog(toml, CatalogFormat::Toml),
            Err(FolioError::Catalog(_))
        ));
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert!(parse_catalog("version = 1\n", CatalogFormat::Toml).unwrap().is_empty());
    }

    #[test]
    fn newer_versions_are_rejected() {
        let toml = "version = 9\n";
        assert!(parse_catalog(toml, CatalogFormat::Toml).is_err());
    }

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("a.TOML")).unwrap(), CatalogFormat::Toml);
        assert_eq!(CatalogFormat::from_path(Path::new("a.json")).unwrap(), CatalogFormat::Json);
        assert!(CatalogFormat::from_path(Path::new("a.yaml")).is_err());
    }
}
