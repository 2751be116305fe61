//! Folio: navigation and overlay state for a photography portfolio page.
//!
//! Folio models everything interactive on a single-page portfolio:
//! - Viewport classification into a compact (carousel) or full (grid) layout
//! - Carousel navigation that wraps or clamps at the edges
//! - Drag-release gestures mapped to page turns
//! - Adjacent-resource preloading with per-index loaded flags
//! - A lightbox and a hamburger menu whose scroll suspension and cancel-key
//!   registration are released on every exit path
//!
//! A headless driver binary replays input scripts against the state and
//! prints each frame as ANSI text or JSON.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Script driver (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Page state
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Gallery Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (gallery/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Navigator   │   │ - Loader      │
//! │ - Theming     │   │ - Overlays    │   │   thread      │
//! │ - Components  │   │ - Preloading  │   │ - Trace ctx   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog, Infrastructure & Domain Layers            │
//! │  - Catalog files (catalog/)                         │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Items, site copy, errors (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The driver reads a TOML file and then applies `--set key=value`
//! overrides:
//!
//! ```toml
//! catalog_file = "~/portfolio/catalog.toml"
//! asset_root = "~/portfolio/public"
//! navigator = "wrapping"
//! breakpoint = 768
//! theme = "darkroom"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use folio::gallery::RecordingHost;
//! use folio::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default(), Rc::new(RecordingHost::new()))?;
//!
//! handle_event(&mut state, &Event::Mount { width: 390 })?;
//! handle_event(&mut state, &Event::Next)?;
//! handle_event(&mut state, &Event::ActivateCurrent)?;
//! assert_eq!(state.overlays.selected_index(), Some(1));
//!
//! handle_event(&mut state, &Event::CancelKey)?;
//! assert!(!state.overlays.lightbox_open());
//! # Ok::<(), folio::FolioError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod gallery;
pub mod infrastructure;
pub mod script;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, LayoutMode, PageVariant, Section};
pub use domain::{FolioError, PortfolioItem, Result, SiteInfo};
pub use gallery::{NavigatorKind, PageHost};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Driver and deployment configuration.
///
/// Every key is optional; a missing key keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog file (`.toml` or `.json`). The built-in catalog is used when
    /// unset.
    pub catalog_file: Option<String>,

    /// Directory that resource locators are resolved against. Default: `"."`
    pub asset_root: String,

    /// Carousel boundary behaviour. Default: clamping
    pub navigator: NavigatorKind,

    /// Whether the compact layout offers the hamburger menu. Default: `true`
    pub menu_enabled: bool,

    /// Widths strictly below this use the compact layout. Default: `768`
    pub breakpoint: u32,

    /// Minimum swipe confidence for a page turn. Default: `10000`
    pub swipe_threshold: f64,

    /// Opening one overlay closes the other. Default: `true`
    pub exclusive_overlays: bool,

    /// Built-in theme name (`paper` or `darkroom`). Ignored if `theme_file`
    /// is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `info` or `folio=debug`. Default: `"info"`
    pub trace_level: String,

    /// Photographer name for the copyright line.
    pub owner: Option<String>,

    /// Hero headline.
    pub title: Option<String>,

    /// Line above the headline.
    pub tagline: Option<String>,

    /// Address behind the contact link.
    pub contact_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let variant = PageVariant::default();
        Self {
            catalog_file: None,
            asset_root: ".".to_string(),
            navigator: variant.navigator,
            menu_enabled: variant.menu_enabled,
            breakpoint: variant.breakpoint,
            swipe_threshold: variant.swipe_threshold,
            exclusive_overlays: variant.exclusive_overlays,
            theme: None,
            theme_file: None,
            trace_level: "info".to_string(),
            owner: None,
            title: None,
            tagline: None,
            contact_email: None,
        }
    }
}

impl Config {
    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Io`] if the file cannot be read and
    /// [`FolioError::Config`] for invalid TOML, wrongly typed values,
    /// unknown keys or values that fail [`Config::validate`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| FolioError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if `swipe_threshold` is negative or not
    /// finite. A negative threshold would turn a motionless release into a
    /// page turn.
    pub fn validate(&self) -> Result<()> {
        if !valid_swipe_threshold(self.swipe_threshold) {
            return Err(FolioError::Config(format!(
                "swipe_threshold must be a non-negative finite number, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }

    /// Applies flat `key = value` overrides on top of the current values.
    ///
    /// # Parsing Rules
    ///
    /// - `navigator`: `wrapping` or `clamping`
    /// - `menu_enabled`, `exclusive_overlays`: `true`/`false`
    /// - `breakpoint`: `u32`
    /// - `swipe_threshold`: non-negative finite `f64`
    /// - everything else is taken verbatim; an empty value clears optional keys
    ///
    /// Malformed values keep the previous setting and unknown keys are
    /// ignored, both with a warning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use folio::{Config, NavigatorKind};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("navigator".to_string(), "wrapping".to_string());
    /// map.insert("breakpoint".to_string(), "wide".to_string());
    ///
    /// let mut config = Config::default();
    /// config.apply_overrides(&map);
    /// assert_eq!(config.navigator, NavigatorKind::Wrapping);
    /// assert_eq!(config.breakpoint, 768);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, String>) {
        for (key, value) in overrides {
            let value = value.trim();
            match key.as_str() {
                "catalog_file" => self.catalog_file = non_empty(value),
                "asset_root" => self.asset_root = value.to_string(),
                "navigator" => {
                    if let Some(kind) = NavigatorKind::from_name(value) {
                        self.navigator = kind;
                    } else {
                        malformed(key, value);
                    }
                }
                "menu_enabled" => parse_into(key, value, &mut self.menu_enabled),
                "exclusive_overlays" => parse_into(key, value, &mut self.exclusive_overlays),
                "breakpoint" => parse_into(key, value, &mut self.breakpoint),
                "swipe_threshold" => match value.parse::<f64>() {
                    Ok(threshold) if valid_swipe_threshold(threshold) => {
                        self.swipe_threshold = threshold;
                    }
                    _ => malformed(key, value),
                },
                "theme" => self.theme = non_empty(value),
                "theme_file" => self.theme_file = non_empty(value),
                "trace_level" => {
                    if !value.is_empty() {
                        self.trace_level = value.to_string();
                    }
                }
                "owner" => self.owner = non_empty(value),
                "title" => self.title = non_empty(value),
                "tagline" => self.tagline = non_empty(value),
                "contact_email" => self.contact_email = non_empty(value),
                _ => tracing::warn!(key = %key, "ignoring unknown configuration key"),
            }
        }
    }

    /// Behaviour settings for [`AppState`].
    #[must_use]
    pub const fn page_variant(&self) -> PageVariant {
        PageVariant {
            navigator: self.navigator,
            menu_enabled: self.menu_enabled,
            breakpoint: self.breakpoint,
            swipe_threshold: self.swipe_threshold,
            exclusive_overlays: self.exclusive_overlays,
        }
    }

    /// Site copy with the configured overrides applied.
    #[must_use]
    pub fn site_info(&self) -> SiteInfo {
        let mut site = SiteInfo::default();
        if let Some(owner) = &self.owner {
            site.owner.clone_from(owner);
        }
        if let Some(title) = &self.title {
            site.title.clone_from(title);
        }
        if let Some(tagline) = &self.tagline {
            site.tagline.clone_from(tagline);
        }
        if let Some(email) = &self.contact_email {
            site.contact_email.clone_from(email);
        }
        site
    }

    /// Asset root with `~` expanded.
    #[must_use]
    pub fn asset_root(&self) -> PathBuf {
        PathBuf::from(infrastructure::expand_tilde(&self.asset_root))
    }
}

fn valid_swipe_threshold(threshold: f64) -> bool {
    threshold.is_finite() && threshold >= 0.0
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn malformed(key: &str, value: &str) {
    tracing::warn!(key = %key, value = %value, "malformed configuration value, keeping previous");
}

fn parse_into<T: std::str::FromStr>(key: &str, value: &str, slot: &mut T) {
    match value.parse() {
        Ok(parsed) => *slot = parsed,
        Err(_) => malformed(key, value),
    }
}

/// Resolves the configured theme, falling back to the default.
///
/// `theme_file` wins over `theme`. Load failures are logged and never fatal.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

/// Builds an unmounted page from configuration.
///
/// Loads the configured catalog (or the built-in one) and theme, and wires
/// overlay side effects to `host`.
///
/// # Errors
///
/// Returns [`FolioError::Io`] or [`FolioError::Catalog`] if the catalog file
/// cannot be read or fails validation.
pub fn initialize(config: &Config, host: Rc<dyn PageHost>) -> Result<AppState> {
    tracing::debug!("initializing folio page");

    let items = match &config.catalog_file {
        Some(path) => catalog::load_catalog(Path::new(&infrastructure::expand_tilde(path)))?,
        None => catalog::builtin(),
    };
    tracing::debug!(item_count = items.len(), "catalog loaded");

    Ok(AppState::new(
        items,
        config.page_variant(),
        config.site_info(),
        load_theme(config),
        host,
    ))
}
