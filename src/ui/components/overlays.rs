//! Lightbox and menu overlay renderers.
//!
//! Overlays are modal and cover the whole frame. The lightbox comes in two
//! presentations: a bottom sheet in the compact layout and a centered frame
//! in the wide layout.

use crate::app::modes::LayoutMode;
use crate::ui::helpers::{center, file_label, framed, pad_right, paint, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{LightboxView, MenuView};

/// Hint line listing the ways out of the lightbox.
const LIGHTBOX_HINT: &str = "✕ close · esc · click outside";

/// Renders the open lightbox.
pub fn render_lightbox(canvas: &mut Canvas, lightbox: &LightboxView, theme: &Theme) {
    let overlay = overlay_style(theme);
    let cols = canvas.cols();

    let body = if lightbox.loaded {
        vec![
            String::new(),
            format!("▣ {}", file_label(&lightbox.src)),
            String::new(),
        ]
    } else {
        vec![String::new(), "loading…".to_string(), String::new()]
    };

    match lightbox.presentation {
        LayoutMode::Compact => {
            // Bottom sheet: dimmed space above, full-width image and caption below.
            for _ in 0..3 {
                canvas.push(paint(&overlay, &" ".repeat(cols)));
            }
            canvas.push(paint(&overlay, &right_aligned("✕", cols)));
            for line in framed(&body, cols) {
                canvas.push(paint(&overlay, &line));
            }
            canvas.push(paint(&overlay, &pad_right(&format!(" {}", lightbox.caption), cols)));
            canvas.push(paint(&overlay, &pad_right(&format!(" {LIGHTBOX_HINT}"), cols)));
        }
        LayoutMode::Full => {
            let width = (cols * 3 / 4).max(2);
            let margin = (cols - width.min(cols)) / 2;
            let indent = " ".repeat(margin);

            canvas.push(paint(&overlay, &right_aligned("✕ ", cols)));
            for line in framed(&body, width) {
                canvas.push(paint(&overlay, &pad_right(&format!("{indent}{line}"), cols)));
            }
            canvas.push(paint(
                &overlay,
                &pad_right(&format!("{indent}{}", lightbox.caption), cols),
            ));
            canvas.push(paint(&overlay, &pad_right(&format!("{indent}#{}", lightbox.item_id), cols)));
            canvas.push(paint(&overlay, &pad_right(&format!("{indent}{LIGHTBOX_HINT}"), cols)));
        }
    }
}

/// Renders the full-screen navigation menu.
pub fn render_menu(canvas: &mut Canvas, menu: &MenuView, theme: &Theme) {
    let overlay = overlay_style(theme);
    let cols = canvas.cols();

    canvas.push(paint(&overlay, &right_aligned("✕", cols)));
    canvas.push(paint(&overlay, &" ".repeat(cols)));
    for link in &menu.links {
        let label = center(&link.label.to_uppercase(), cols);
        canvas.push(paint(&format!("{overlay}{}", Theme::bold()), &label));
        canvas.push(paint(&overlay, &" ".repeat(cols)));
    }
}

fn overlay_style(theme: &Theme) -> String {
    format!(
        "{}{}",
        Theme::bg(&theme.colors.overlay_bg),
        Theme::fg(&theme.colors.overlay_fg)
    )
}

fn right_aligned(text: &str, cols: usize) -> String {
    let len = text.chars().count();
    format!("{}{text}", " ".repeat(cols.saturating_sub(len)))
}
