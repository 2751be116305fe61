//! Error types for the Folio gallery engine.
//!
//! This module defines the centralized error type [`FolioError`] and a type alias
//! [`Result`] used throughout the crate. Navigation itself never fails; these
//! errors only surface while loading configuration, catalogs, themes, or while
//! talking to the background resource loader.

use thiserror::Error;

/// The main error type for Folio operations.
///
/// Every variant describes a startup or host-side failure. The gallery state
/// machines absorb their own edge cases (out-of-range indices, empty catalogs,
/// failed loads) and never produce an error.
///
/// # Examples
///
/// ```
/// use folio::FolioError;
///
/// fn validate() -> Result<(), FolioError> {
///     Err(FolioError::Catalog("duplicate id 3".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FolioError {
    /// The portfolio catalog could not be parsed or failed validation.
    ///
    /// The string names the offending record or the parse failure.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Communication with the resource loader thread failed.
    ///
    /// Occurs when the loader channel is disconnected before a request could be
    /// queued.
    #[error("Loader error: {0}")]
    Loader(String),
}

/// A specialized `Result` type for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
