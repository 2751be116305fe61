//! Shared rendering utilities and helpers.
//!
//! Components draw into a [`Canvas`], a buffer of finished lines for a fixed
//! column count. Widths are measured in characters of the plain text, so
//! styling is always applied after padding and truncation.
//!
//! # Example
//!
//! ```rust
//! use folio::ui::helpers::{Canvas, truncate};
//!
//! let mut canvas = Canvas::new(20);
//! canvas.centered("ma.", "");
//! canvas.blank();
//! assert_eq!(canvas.line_count(), 2);
//! assert_eq!(truncate("Photography Portfolio", 8), "Photogr…");
//! ```

use crate::ui::theme::Theme;

/// Line buffer for one rendered frame.
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: usize,
    lines: Vec<String>,
}

impl Canvas {
    /// Creates an empty canvas `cols` characters wide (at least one).
    #[must_use]
    pub fn new(cols: usize) -> Self {
        Self {
            cols: cols.max(1),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Appends a line that is already styled and fitted.
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Appends `text`, truncated to the canvas width, left aligned.
    pub fn left(&mut self, text: &str, style: &str) {
        let fitted = truncate(text, self.cols);
        self.lines.push(paint(style, &fitted));
    }

    /// Appends `text`, truncated to the canvas width, centered.
    pub fn centered(&mut self, text: &str, style: &str) {
        let fitted = center(&truncate(text, self.cols), self.cols);
        self.lines.push(paint(style, fitted.trim_end()));
    }

    /// Appends `text` word-wrapped to `width` and centered on the canvas.
    pub fn paragraph(&mut self, text: &str, width: usize, style: &str) {
        for line in wrap(text, width.min(self.cols)) {
            self.centered(&line, style);
        }
    }

    /// Appends a horizontal rule across the full width.
    pub fn rule(&mut self, color: &str) {
        let line = "─".repeat(self.cols);
        self.lines.push(paint(&Theme::fg(color), &line));
    }

    /// Joins the lines into one frame, each terminated by a newline.
    #[must_use]
    pub fn into_string(self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in self.lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Wraps `text` in `style` and a reset. An empty style leaves it unstyled.
#[must_use]
pub fn paint(style: &str, text: &str) -> String {
    if style.is_empty() || text.is_empty() {
        text.to_string()
    } else {
        format!("{style}{text}{}", Theme::reset())
    }
}

/// Shortens `text` to at most `width` characters, marking cuts with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Pads `text` on both sides to `width` characters; the left side gets the
/// smaller half.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let padding = width.saturating_sub(len);
    let left = padding / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(padding - left))
}

/// Pads `text` on the right to exactly `width` characters, truncating if
/// it is longer.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let len = fitted.chars().count();
    format!("{fitted}{}", " ".repeat(width.saturating_sub(len)))
}

/// Greedy word wrap. Words longer than `width` are truncated.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draws a box of `width` characters around `body`, each body line centered.
///
/// Returns plain lines; callers style them as a whole.
#[must_use]
pub fn framed(body: &[String], width: usize) -> Vec<String> {
    let width = width.max(2);
    let inner = width - 2;
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("┌{}┐", "─".repeat(inner)));
    for line in body {
        lines.push(format!("│{}│", center(&truncate(line, inner), inner)));
    }
    lines.push(format!("└{}┘", "─".repeat(inner)));
    lines
}

/// File name part of a resource locator, for image placeholders.
#[must_use]
pub fn file_label(src: &str) -> &str {
    src.rsplit('/').find(|part| !part.is_empty()).unwrap_or(src)
}
