//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of every per-page
//! state holder: the viewport classifier, the gallery navigator, the overlay
//! controller and the preload cache. Nothing here is global; two pages are
//! two `AppState` values.
//!
//! # Architecture
//!
//! `AppState` keeps the immutable inputs (catalog, page variant, site copy,
//! theme) next to the mutable holders. Each holder changes only through its
//! own transitions; `AppState` merely sequences them and turns index changes
//! into resource load requests. View models are computed on demand from a
//! state snapshot.
//!
//! # Lifecycle
//!
//! ```text
//! new ──▶ mount(width) ──▶ events … ──▶ unmount ──▶ mount(width) …
//! ```
//!
//! Unmounting drops every overlay guard, resets the navigator to the first
//! item and clears the preload cache. Dropping the `AppState` itself has the
//! same effect on the host as unmounting.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use folio::app::{modes::PageVariant, AppState};
//! use folio::domain::{PortfolioItem, SiteInfo};
//! use folio::gallery::RecordingHost;
//! use folio::ui::Theme;
//!
//! let items = vec![PortfolioItem::new(1, "/images/a.jpg", "50mm")];
//! let host = Rc::new(RecordingHost::new());
//! let mut state = AppState::new(items, PageVariant::default(), SiteInfo::default(), Theme::default(), host);
//!
//! let actions = state.mount(390);
//! assert_eq!(actions.len(), 1);
//! let viewmodel = state.compute_viewmodel();
//! assert!(viewmodel.layout.is_compact());
//! ```

use super::actions::Action;
use super::modes::{LayoutMode, PageVariant};
use crate::domain::{PortfolioItem, SiteInfo};
use crate::gallery::{
    CloseReason, NavigatorState, OverlayController, PageHost, PreloadCache, ViewportState,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AboutView, CarouselView, FooterView, GalleryView, GridTile, HeaderView, HeroView, LightboxView,
    LinkView, MenuView, PageViewModel, TileSpan,
};
use chrono::Datelike;
use std::rc::Rc;

/// Placeholder shown instead of the gallery when the catalog is empty.
const EMPTY_GALLERY_MESSAGE: &str = "No photographs to show yet.";

/// Central application state container.
///
/// Mutated by [`handle_event`](super::handle_event) in response to host
/// input and resource load completions.
#[derive(Debug)]
pub struct AppState {
    /// Catalog items in display order. Never mutated after construction.
    pub items: Vec<PortfolioItem>,

    /// Deployment behaviour (navigator kind, menu, breakpoint, thresholds).
    pub variant: PageVariant,

    /// Copy rendered around the gallery.
    pub site: SiteInfo,

    /// Color scheme for the ANSI renderer.
    pub theme: Theme,

    /// Last reported width and the layout derived from it.
    pub viewport: ViewportState,

    /// Current carousel position.
    pub navigator: NavigatorState,

    /// Lightbox and menu state machines.
    pub overlays: OverlayController,

    /// Per-index resource load status.
    pub preload: PreloadCache,

    mounted: bool,
}

impl AppState {
    /// Creates an unmounted page.
    ///
    /// # Parameters
    ///
    /// * `items` - Catalog in display order (may be empty)
    /// * `variant` - Deployment behaviour
    /// * `site` - Static page copy
    /// * `theme` - Color scheme for rendering
    /// * `host` - Receives scroll suspension and cancel-key registration calls
    #[must_use]
    pub fn new(
        items: Vec<PortfolioItem>,
        variant: PageVariant,
        site: SiteInfo,
        theme: Theme,
        host: Rc<dyn PageHost>,
    ) -> Self {
        let navigator = NavigatorState::new(variant.navigator, items.len());
        Self {
            items,
            variant,
            site,
            theme,
            viewport: ViewportState::new(variant.breakpoint),
            navigator,
            overlays: OverlayController::new(host, variant.exclusive_overlays),
            preload: PreloadCache::new(),
            mounted: false,
        }
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Layout derived from the last reported width.
    #[must_use]
    pub const fn layout(&self) -> LayoutMode {
        LayoutMode::from_compact(self.viewport.is_compact)
    }

    /// Whether the hamburger menu is offered right now.
    #[must_use]
    pub const fn menu_available(&self) -> bool {
        self.variant.menu_enabled && self.viewport.is_compact
    }

    /// Item at the carousel position, `None` for an empty catalog.
    #[must_use]
    pub fn current_item(&self) -> Option<&PortfolioItem> {
        self.items.get(self.navigator.current_index())
    }

    /// Mounts the page at `width` and requests the initially visible resources.
    pub fn mount(&mut self, width: u32) -> Vec<Action> {
        self.viewport.update(width);
        self.mounted = true;
        tracing::debug!(
            width,
            is_compact = self.viewport.is_compact,
            items = self.items.len(),
            "page mounted"
        );
        let window = self.visible_indices();
        self.request_loads(&window)
    }

    /// Tears the page down: closes every overlay, forgets the carousel
    /// position and the loaded flags.
    pub fn unmount(&mut self) {
        self.overlays.close_all(CloseReason::Teardown);
        self.navigator = NavigatorState::new(self.variant.navigator, self.items.len());
        self.preload.clear();
        self.viewport = ViewportState::new(self.variant.breakpoint);
        self.mounted = false;
        tracing::debug!("page unmounted");
    }

    /// Records a new width.
    ///
    /// Returns whether the layout flipped, and the loads needed by the new
    /// layout. Leaving the compact layout closes the menu, since the wide
    /// header has no hamburger to dismiss it with.
    pub fn resize(&mut self, width: u32) -> (bool, Vec<Action>) {
        if !self.viewport.update(width) {
            return (false, vec![]);
        }

        if !self.menu_available() {
            self.overlays.close_menu(CloseReason::LayoutChange);
        }

        let actions = if self.mounted {
            let window = self.visible_indices();
            self.request_loads(&window)
        } else {
            vec![]
        };
        (true, actions)
    }

    /// Moves the carousel to `next` if it differs from the current position.
    ///
    /// On a change, returns the load requests for the new preload window.
    pub fn navigate(&mut self, next: NavigatorState) -> (bool, Vec<Action>) {
        if next == self.navigator {
            return (false, vec![]);
        }

        tracing::debug!(
            from = self.navigator.current_index(),
            to = next.current_index(),
            "carousel moved"
        );
        self.navigator = next;
        let window = self.navigator.preload_window();
        let actions = self.request_loads(&window);
        (true, actions)
    }

    /// Opens the lightbox on the item at `index`.
    ///
    /// Out-of-range indices are ignored. The item's resource is requested if
    /// it is not already loading.
    pub fn activate_item(&mut self, index: usize) -> (bool, Vec<Action>) {
        let Some(item) = self.items.get(index).cloned() else {
            tracing::debug!(index, "activation outside the catalog ignored");
            return (false, vec![]);
        };

        let changed = self.overlays.open_lightbox(index, item);
        let actions = self.request_loads(&[index]);
        (changed, actions)
    }

    /// Indices whose resources the current layout shows.
    ///
    /// The grid shows every tile; the carousel shows the current slide and
    /// keeps its neighbours warm.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.viewport.is_compact {
            self.navigator.preload_window()
        } else {
            (0..self.items.len()).collect()
        }
    }

    fn request_loads(&mut self, window: &[usize]) -> Vec<Action> {
        self.preload
            .request(window)
            .into_iter()
            .filter_map(|index| {
                self.items.get(index).map(|item| Action::LoadResource {
                    index,
                    item_id: item.id,
                    src: item.src.clone(),
                })
            })
            .collect()
    }

    /// Computes the view model for the current state.
    ///
    /// The layout, and with it the lightbox presentation, is taken from the
    /// viewport at call time.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PageViewModel {
        let _span = tracing::trace_span!("compute_viewmodel").entered();

        let layout = self.layout();
        PageViewModel {
            layout,
            header: self.compute_header(layout),
            hero: HeroView {
                tagline: self.site.tagline.clone(),
                title: self.site.title.clone(),
                subtitle: self.site.subtitle.clone(),
            },
            gallery: self.compute_gallery(layout),
            about: AboutView {
                heading: self.site.about_heading.clone(),
                quote: self.site.quote.clone(),
                quote_author: self.site.quote_author.clone(),
                bio: self.site.bio.clone(),
                contact_email: self.site.contact_email.clone(),
            },
            footer: FooterView {
                text: self.site.copyright(chrono::Local::now().year()),
            },
            lightbox: self.compute_lightbox(layout),
            menu: self.overlays.menu_open().then(|| MenuView {
                links: LinkView::all(),
            }),
            scroll_locked: self.overlays.scroll_suspended(),
        }
    }

    fn compute_header(&self, layout: LayoutMode) -> HeaderView {
        HeaderView {
            brand: self.site.brand.clone(),
            links: if layout.is_compact() {
                vec![]
            } else {
                LinkView::all()
            },
            show_menu_button: self.menu_available(),
        }
    }

    fn compute_gallery(&self, layout: LayoutMode) -> GalleryView {
        if self.items.is_empty() {
            return GalleryView::Empty {
                message: EMPTY_GALLERY_MESSAGE.to_string(),
            };
        }

        match layout {
            LayoutMode::Full => GalleryView::Grid {
                tiles: self
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let span = TileSpan::for_index(index);
                        GridTile {
                            index,
                            item_id: item.id,
                            src: item.src.clone(),
                            caption: item.settings.clone(),
                            span,
                            staggered: span == TileSpan::Half && index % 2 == 1,
                            loaded: self.preload.is_loaded(index),
                        }
                    })
                    .collect(),
            },
            LayoutMode::Compact => {
                let index = self.navigator.current_index();
                let item = &self.items[index];
                GalleryView::Carousel(CarouselView {
                    index,
                    item_id: item.id,
                    src: item.src.clone(),
                    caption: item.settings.clone(),
                    loaded: self.preload.is_loaded(index),
                    show_back: self.navigator.can_go_back(),
                    show_forward: self.navigator.can_go_forward(),
                    dots: (0..self.items.len()).map(|i| i == index).collect(),
                })
            }
        }
    }

    fn compute_lightbox(&self, layout: LayoutMode) -> Option<LightboxView> {
        let item = self.overlays.selected_item()?;
        let index = self.overlays.selected_index()?;
        Some(LightboxView {
            presentation: layout,
            index,
            item_id: item.id,
            src: item.src.clone(),
            caption: item.settings.clone(),
            loaded: self.preload.is_loaded(index),
        })
    }
}
