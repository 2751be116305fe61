//! Hero and about section renderers.

use crate::ui::helpers::{paint, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AboutView, HeroView};

/// Widest paragraph measure, so long copy stays readable on wide terminals.
const MEASURE: usize = 60;

/// Renders the hero block: tagline, headline and subtitle.
pub fn render_hero(canvas: &mut Canvas, hero: &HeroView, theme: &Theme) {
    canvas.blank();
    canvas.centered(&hero.tagline.to_uppercase(), &Theme::fg(&theme.colors.text_dim));
    canvas.centered(
        &hero.title,
        &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading)),
    );
    canvas.blank();
    canvas.paragraph(&hero.subtitle, MEASURE, &Theme::fg(&theme.colors.text));
    canvas.blank();
}

/// Renders the about band: heading, quotation, biography and contact link.
///
/// The band uses the section colors across its full width; inner resets are
/// followed by the band style again so the background never breaks.
pub fn render_about(canvas: &mut Canvas, about: &AboutView, theme: &Theme) {
    let band = format!(
        "{}{}",
        Theme::bg(&theme.colors.section_bg),
        Theme::fg(&theme.colors.section_fg)
    );
    let mut section = Canvas::new(canvas.cols());

    section.blank();
    section.centered(&about.heading.to_uppercase(), "");
    section.blank();
    section.paragraph(&format!("“{}”", about.quote), MEASURE, Theme::italic());
    section.centered(&format!("— {}", about.quote_author), "");
    section.blank();
    section.paragraph(&about.bio, MEASURE, "");
    section.blank();
    section.centered(&format!("mailto:{}", about.contact_email), Theme::bold());
    section.blank();

    let cols = canvas.cols();
    let restyle = format!("{}{band}", Theme::reset());
    for line in section.into_string().lines() {
        let line = line.replace(Theme::reset(), &restyle);
        canvas.push(paint(&band, &fill(&line, cols)));
    }
}

/// Pads a possibly styled line with spaces so the band color reaches the
/// right edge. Escape sequences do not count towards the width.
fn fill(line: &str, cols: usize) -> String {
    let visible = visible_width(line);
    format!("{line}{}", " ".repeat(cols.saturating_sub(visible)))
}

fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in line.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}
