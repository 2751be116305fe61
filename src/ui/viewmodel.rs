//! View model types representing renderable page state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) on demand
//! and contain no behaviour, only display-ready data. They serialise to JSON
//! so a host can render them with any presentation layer; the crate's own
//! renderer turns them into ANSI text.
//!
//! # Example
//!
//! ```rust
//! use folio::ui::viewmodel::{GalleryView, TileSpan};
//!
//! let gallery = GalleryView::Empty { message: "Nothing to show yet".to_string() };
//! assert!(matches!(gallery, GalleryView::Empty { .. }));
//! assert_eq!(TileSpan::for_index(3), TileSpan::Full);
//! ```

use crate::app::modes::{LayoutMode, Section};
use serde::Serialize;

/// Complete page view model for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageViewModel {
    /// Layout the frame was computed for.
    pub layout: LayoutMode,

    /// Top navigation bar.
    pub header: HeaderView,

    /// Hero headline block.
    pub hero: HeroView,

    /// Gallery section, shaped by the layout.
    pub gallery: GalleryView,

    /// About section.
    pub about: AboutView,

    /// Copyright footer.
    pub footer: FooterView,

    /// Open lightbox, if any.
    pub lightbox: Option<LightboxView>,

    /// Open navigation menu, if any.
    pub menu: Option<MenuView>,

    /// Whether page scrolling is currently suspended.
    pub scroll_locked: bool,
}

/// Header bar contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    /// Brand mark.
    pub brand: String,

    /// Inline navigation links; empty in the compact layout.
    pub links: Vec<LinkView>,

    /// Whether the hamburger button is shown.
    pub show_menu_button: bool,
}

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    /// Visible label.
    pub label: String,

    /// Section the link leads to.
    pub section: Section,
}

impl LinkView {
    /// Builds the link list in header order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        Section::ALL
            .iter()
            .map(|&section| Self {
                label: section.label().to_string(),
                section,
            })
            .collect()
    }
}

/// Hero block contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    /// Small caps line above the title.
    pub tagline: String,
    /// Headline.
    pub title: String,
    /// Paragraph below the headline.
    pub subtitle: String,
}

/// Gallery section in one of its three shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryView {
    /// The catalog is empty.
    Empty {
        /// Placeholder text.
        message: String,
    },

    /// Wide layout: every item as a masonry tile.
    Grid {
        /// Tiles in catalog order.
        tiles: Vec<GridTile>,
    },

    /// Compact layout: one slide at a time.
    Carousel(CarouselView),
}

/// Width of a masonry tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSpan {
    /// Spans the full row.
    Full,
    /// Takes half a row.
    Half,
}

impl TileSpan {
    /// Every third item, starting with the first, spans the full row.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 3 == 0 {
            Self::Full
        } else {
            Self::Half
        }
    }
}

/// One tile of the wide-layout grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridTile {
    /// Position in the catalog.
    pub index: usize,
    /// Item identifier.
    pub item_id: u32,
    /// Resource locator.
    pub src: String,
    /// Camera settings caption.
    pub caption: String,
    /// Tile width.
    pub span: TileSpan,
    /// Half tiles at odd positions sit lower than their neighbour.
    pub staggered: bool,
    /// Whether the resource has finished loading.
    pub loaded: bool,
}

/// The compact-layout carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselView {
    /// Index of the visible slide.
    pub index: usize,
    /// Identifier of the visible item.
    pub item_id: u32,
    /// Resource locator of the visible item.
    pub src: String,
    /// Camera settings caption.
    pub caption: String,
    /// Whether the visible resource has finished loading.
    pub loaded: bool,
    /// Whether the backward affordance is shown.
    pub show_back: bool,
    /// Whether the forward affordance is shown.
    pub show_forward: bool,
    /// One entry per item; `true` marks the active dot.
    pub dots: Vec<bool>,
}

/// About section contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutView {
    /// Section heading.
    pub heading: String,
    /// Quotation.
    pub quote: String,
    /// Quotation attribution.
    pub quote_author: String,
    /// Biography paragraph.
    pub bio: String,
    /// Contact address.
    pub contact_email: String,
}

/// Footer contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    /// Copyright line.
    pub text: String,
}

/// The open lightbox.
///
/// `presentation` follows the layout of the frame being computed, so a
/// lightbox opened in the grid switches to the compact presentation when the
/// viewport narrows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightboxView {
    /// Compact (bottom sheet) or full (centered) presentation.
    pub presentation: LayoutMode,
    /// Position of the shown item in the catalog.
    pub index: usize,
    /// Identifier of the shown item.
    pub item_id: u32,
    /// Resource locator of the shown item.
    pub src: String,
    /// Camera settings caption.
    pub caption: String,
    /// Whether the resource has finished loading.
    pub loaded: bool,
}

/// The open navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    /// Links in menu order.
    pub links: Vec<LinkView>,
}
