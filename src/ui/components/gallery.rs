//! Gallery component renderer.
//!
//! Draws the three shapes of the gallery section: the masonry grid of the
//! wide layout, the single-slide carousel of the compact layout, and the
//! placeholder for an empty catalog.

use crate::ui::helpers::{center, file_label, framed, pad_right, paint, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CarouselView, GalleryView, GridTile, TileSpan};

/// Columns between two half tiles.
const GUTTER: usize = 2;

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";
const BACK: &str = "‹";
const FORWARD: &str = "›";

/// Renders the gallery section in whichever shape the view model carries.
pub fn render_gallery(canvas: &mut Canvas, gallery: &GalleryView, theme: &Theme) {
    match gallery {
        GalleryView::Empty { message } => {
            canvas.blank();
            canvas.centered(message, &Theme::fg(&theme.colors.text_dim));
            canvas.blank();
        }
        GalleryView::Grid { tiles } => render_grid(canvas, tiles, theme),
        GalleryView::Carousel(carousel) => render_carousel(canvas, carousel, theme),
    }
}

/// Body lines of an image placeholder.
fn placeholder(src: &str, loaded: bool) -> Vec<String> {
    if loaded {
        vec![String::new(), format!("▣ {}", file_label(src)), String::new()]
    } else {
        vec![String::new(), "· · ·".to_string(), String::new()]
    }
}

/// Plain lines of one tile: framed image followed by its caption.
fn tile_lines(tile: &GridTile, width: usize) -> Vec<String> {
    let mut lines = framed(&placeholder(&tile.src, tile.loaded), width);
    lines.push(center(&format!("#{}  {}", tile.index, tile.caption), width));
    lines
}

fn tile_style(tile: &GridTile, theme: &Theme) -> String {
    if tile.loaded {
        Theme::fg(&theme.colors.text)
    } else {
        Theme::fg(&theme.colors.pending)
    }
}

/// Renders tiles row by row: full tiles alone, half tiles in pairs.
///
/// A staggered half tile starts one line lower than its neighbour.
fn render_grid(canvas: &mut Canvas, tiles: &[GridTile], theme: &Theme) {
    let cols = canvas.cols();
    let half = cols.saturating_sub(GUTTER) / 2;
    let mut pending_half: Option<&GridTile> = None;

    canvas.blank();
    for tile in tiles {
        match tile.span {
            TileSpan::Full => {
                if let Some(left) = pending_half.take() {
                    render_half_row(canvas, left, None, half, theme);
                }
                let style = tile_style(tile, theme);
                for line in tile_lines(tile, cols) {
                    canvas.push(paint(&style, &line));
                }
                canvas.blank();
            }
            TileSpan::Half => match pending_half.take() {
                Some(left) => render_half_row(canvas, left, Some(tile), half, theme),
                None => pending_half = Some(tile),
            },
        }
    }
    if let Some(left) = pending_half {
        render_half_row(canvas, left, None, half, theme);
    }
}

fn render_half_row(
    canvas: &mut Canvas,
    left: &GridTile,
    right: Option<&GridTile>,
    width: usize,
    theme: &Theme,
) {
    let column = |tile: &GridTile| {
        let mut lines = tile_lines(tile, width);
        if tile.staggered {
            lines.insert(0, String::new());
        }
        lines
    };

    let left_lines = column(left);
    let right_lines = right.map(column).unwrap_or_default();
    let left_style = tile_style(left, theme);
    let right_style = right.map(|tile| tile_style(tile, theme)).unwrap_or_default();
    let gutter = " ".repeat(GUTTER);

    for row in 0..left_lines.len().max(right_lines.len()) {
        let l = left_lines.get(row).map_or("", String::as_str);
        let r = right_lines.get(row).map_or("", String::as_str);
        let line = format!(
            "{}{gutter}{}",
            paint(&left_style, &pad_right(l, width)),
            paint(&right_style, r)
        );
        canvas.push(line.trim_end().to_string());
    }
    canvas.blank();
}

/// Renders the current slide with its affordances and navigation dots.
///
/// # Layout
///
/// ```text
///  ‹ ┌──────────────┐ ›
///    │ ▣ doggo.jpg  │
///    └──────────────┘
///   85mm • f/2.8 • Sony A6700
///        ○ ○ ● ○ ○
/// ```
fn render_carousel(canvas: &mut Canvas, carousel: &CarouselView, theme: &Theme) {
    let cols = canvas.cols();
    let frame_width = cols.saturating_sub(4).max(2);
    let style = if carousel.loaded {
        Theme::fg(&theme.colors.text)
    } else {
        Theme::fg(&theme.colors.pending)
    };
    let accent = Theme::fg(&theme.colors.accent);

    let frame = framed(&placeholder(&carousel.src, carousel.loaded), frame_width);
    let middle = frame.len() / 2;

    canvas.blank();
    for (row, line) in frame.iter().enumerate() {
        let (back, forward) = if row == middle {
            (
                if carousel.show_back { BACK } else { " " },
                if carousel.show_forward { FORWARD } else { " " },
            )
        } else {
            (" ", " ")
        };
        canvas.push(format!(
            "{} {} {}",
            paint(&accent, back),
            paint(&style, line),
            paint(&accent, forward)
        ));
    }

    canvas.centered(&carousel.caption, &Theme::fg(&theme.colors.text_dim));

    let dots = carousel
        .dots
        .iter()
        .map(|&active| {
            if active {
                paint(&accent, ACTIVE_DOT)
            } else {
                paint(&Theme::fg(&theme.colors.dot_inactive), INACTIVE_DOT)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let dots_width = carousel.dots.len() * 2 - usize::from(!carousel.dots.is_empty());
    canvas.push(format!("{}{dots}", " ".repeat(cols.saturating_sub(dots_width) / 2)));
    canvas.blank();
}
