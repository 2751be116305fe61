//! Header component renderer.
//!
//! Brand mark on the left; inline section links (wide layout) or the
//! hamburger button (compact layout) on the right.

use crate::ui::helpers::{paint, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderView;

/// Label of the hamburger button.
const MENU_BUTTON: &str = "☰";

/// Renders the header bar as one line followed by a rule.
///
/// # Layout
///
/// ```text
/// ma.                                   Work   About   Contact
/// ```
///
/// If brand and links do not fit side by side, the links are dropped.
pub fn render_header(canvas: &mut Canvas, header: &HeaderView, theme: &Theme) {
    let right = if header.show_menu_button {
        MENU_BUTTON.to_string()
    } else {
        header
            .links
            .iter()
            .map(|link| link.label.as_str())
            .collect::<Vec<_>>()
            .join("   ")
    };

    let brand_len = header.brand.chars().count();
    let right_len = right.chars().count();
    let cols = canvas.cols();

    let brand = paint(
        &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)),
        &header.brand,
    );

    if right.is_empty() || brand_len + 1 + right_len > cols {
        canvas.push(brand);
    } else {
        let gap = " ".repeat(cols - brand_len - right_len);
        let right = paint(&Theme::fg(&theme.colors.text), &right);
        canvas.push(format!("{brand}{gap}{right}"));
    }
    canvas.rule(&theme.colors.border);
}
