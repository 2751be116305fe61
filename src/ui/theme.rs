//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the text renderer,
//! supporting built-in themes and custom themes loaded from TOML files. It
//! provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `paper`: Light theme in the page's cream and ink tones (default)
//! - `darkroom`: Dark theme with a red safelight accent
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! page_bg = "#FDFBF7"      # optional
//! text = "#1A1A1A"
//! text_dim = "#6B7280"
//! heading = "#111111"
//! accent = "#1A1A1A"
//! border = "#D1D5DB"
//! pending = "#9CA3AF"
//! dot_inactive = "#D1D5DB"
//! overlay_fg = "#FDFBF7"
//! overlay_bg = "#111111"
//! section_fg = "#FDFBF7"
//! section_bg = "#111111"
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio::ui::theme::Theme;
//!
//! let theme = Theme::from_name("darkroom").unwrap();
//! println!("{}", Theme::fg(&theme.colors.accent));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all page elements.
    pub colors: ThemeColors,
}

/// Color definitions for all page elements.
///
/// All colors are hex strings (e.g., "#1A1A1A").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Optional page background. Terminals keep their own when absent.
    #[serde(default)]
    pub page_bg: Option<String>,

    /// Body text.
    pub text: String,
    /// Captions, footer and other secondary text.
    pub text_dim: String,
    /// Headlines.
    pub heading: String,
    /// Brand mark, active dot and carousel affordances.
    pub accent: String,

    /// Rules between sections and tile frames.
    pub border: String,
    /// Placeholder shown while a resource is still loading.
    pub pending: String,
    /// Inactive navigation dots.
    pub dot_inactive: String,

    /// Lightbox and menu text.
    pub overlay_fg: String,
    /// Lightbox and menu backdrop.
    pub overlay_bg: String,

    /// About section text.
    pub section_fg: String,
    /// About section band.
    pub section_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized (`paper`, `darkroom`)
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("paper").unwrap();
    /// assert_eq!(theme.name, "paper");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "paper" => include_str!("../../themes/paper.toml"),
            "darkroom" => include_str!("../../themes/darkroom.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing fields).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FolioError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| FolioError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Strips `#` prefix if present, accepts the 3-digit shorthand, and
    /// returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        let expanded: String = if hex.len() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_string()
        };

        if expanded.len() != 6 || !expanded.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&expanded[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&expanded[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&expanded[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#111"), "\u{1b}[38;2;17;17;17m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI italic escape sequence (`\x1b[3m`).
    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, italic, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`paper`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("paper").expect("Built-in paper theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in ["paper", "darkroom"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::default().colors.page_bg.is_some());
        assert!(Theme::from_name("darkroom").unwrap().colors.page_bg.is_none());
    }

    #[test]
    fn hex_parsing_handles_shorthand_and_garbage() {
        assert_eq!(Theme::hex_to_rgb("#FDFBF7"), (0xFD, 0xFB, 0xF7));
        assert_eq!(Theme::hex_to_rgb("111"), (0x11, 0x11, 0x11));
        assert_eq!(Theme::hex_to_rgb("#zzzzzz"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#12345"), (255, 255, 255));
    }

    #[test]
    fn missing_theme_file_is_a_theme_error() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, FolioError::Theme(_)));
    }
}
