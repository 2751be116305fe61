//! Composable page component renderers.
//!
//! Each component draws one part of the page into a shared
//! [`Canvas`](crate::ui::helpers::Canvas).
//!
//! # Components
//!
//! - [`header`]: Brand mark with section links or the hamburger button
//! - [`sections`]: Hero headline and the about band
//! - [`gallery`]: Masonry grid, carousel or empty placeholder
//! - [`footer`]: Copyright line
//! - [`overlays`]: Lightbox and navigation menu
//!
//! # Layout Modes
//!
//! - [`render_page`]: Header + Hero + Gallery + About + Footer
//! - [`render_overlay`]: the topmost open overlay, covering the page

mod footer;
mod gallery;
mod header;
mod overlays;
mod sections;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PageViewModel;

use footer::render_footer;
use gallery::render_gallery;
use header::render_header;
use overlays::{render_lightbox, render_menu};
use sections::{render_about, render_hero};

/// Renders the scrolling page underneath any overlay.
///
/// Layout structure:
/// ```text
/// [Header]
/// [Border]
/// [Hero]
/// [Gallery]
/// [About band]
/// [Border]
/// [Footer]
/// ```
pub fn render_page(canvas: &mut Canvas, vm: &PageViewModel, theme: &Theme) {
    render_header(canvas, &vm.header, theme);
    render_hero(canvas, &vm.hero, theme);
    render_gallery(canvas, &vm.gallery, theme);
    render_about(canvas, &vm.about, theme);
    render_footer(canvas, &vm.footer, theme);
}

/// Renders the topmost open overlay.
///
/// The lightbox sits above the menu, so it wins when both are open.
///
/// # Returns
///
/// `false` if no overlay is open and nothing was drawn.
pub fn render_overlay(canvas: &mut Canvas, vm: &PageViewModel, theme: &Theme) -> bool {
    if let Some(lightbox) = &vm.lightbox {
        render_lightbox(canvas, lightbox, theme);
        true
    } else if let Some(menu) = &vm.menu {
        render_menu(canvas, menu, theme);
        true
    } else {
        false
    }
}
