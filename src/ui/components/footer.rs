//! Footer component renderer.
//!
//! This module renders the copyright line, centered and dimmed.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterView;

/// Renders the footer preceded by a rule.
///
/// Text longer than the canvas is truncated to keep the layout intact on
/// narrow terminals.
pub fn render_footer(canvas: &mut Canvas, footer: &FooterView, theme: &Theme) {
    canvas.rule(&theme.colors.border);
    canvas.centered(&footer.text, &Theme::fg(&theme.colors.text_dim));
}
