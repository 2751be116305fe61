//! Lightbox and menu overlay state machines.
//!
//! Each overlay is either closed or open with a payload. Opening acquires the
//! overlay's scoped effects (scroll suspension, and for the lightbox the
//! cancel-key listener); closing simply drops them. Replacing the lightbox
//! payload while it is open keeps the existing guards, so the transition goes
//! straight from `open(a)` to `open(b)` without the host seeing a restore.
//!
//! # Transitions
//!
//! ```text
//!              activate(x)                 activate(y)
//!   closed ─────────────────▶ open(x) ─────────────────▶ open(y)
//!      ▲                         │
//!      └── button / backdrop / cancel key (lightbox only) / teardown
//! ```

use super::scope::{CancelKeyGuard, PageHost, ScrollGuard, ScrollLock};
use crate::domain::PortfolioItem;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// Why an overlay closed. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The close button was activated.
    Button,
    /// The dimmed area around the content was clicked.
    Backdrop,
    /// The cancel key arrived while the lightbox listener was registered.
    CancelKey,
    /// Another overlay opened and overlays are exclusive.
    Superseded,
    /// A menu link was followed.
    Navigation,
    /// The layout left the mode in which the overlay is offered.
    LayoutChange,
    /// The gallery was remounted or torn down.
    Teardown,
}

/// Open lightbox: the selected item plus the effects it holds.
struct Lightbox {
    index: usize,
    item: PortfolioItem,
    _scroll: ScrollGuard,
    _cancel_key: CancelKeyGuard,
}

/// Open menu: only holds the scroll suspension.
struct MenuOverlay {
    _scroll: ScrollGuard,
}

/// Owner of both overlays.
///
/// With `exclusive` set (the default deployment), opening one overlay closes
/// the other. Without it both may be open at once; the shared [`ScrollLock`]
/// keeps host calls balanced in either mode.
pub struct OverlayController {
    host: Rc<dyn PageHost>,
    scroll: ScrollLock,
    exclusive: bool,
    lightbox: Option<Lightbox>,
    menu: Option<MenuOverlay>,
}

impl OverlayController {
    #[must_use]
    pub fn new(host: Rc<dyn PageHost>, exclusive: bool) -> Self {
        let scroll = ScrollLock::new(Rc::clone(&host));
        Self {
            host,
            scroll,
            exclusive,
            lightbox: None,
            menu: None,
        }
    }

    /// Shows `item` (at catalog position `index`) in the lightbox.
    ///
    /// If the lightbox is already open only the payload changes. Returns
    /// `true` when anything observable changed.
    pub fn open_lightbox(&mut self, index: usize, item: PortfolioItem) -> bool {
        if let Some(lightbox) = self.lightbox.as_mut() {
            if lightbox.index == index && lightbox.item == item {
                return false;
            }
            tracing::debug!(from = lightbox.item.id, to = item.id, "replacing lightbox item");
            lightbox.index = index;
            lightbox.item = item;
            return true;
        }

        tracing::debug!(item_id = item.id, index, "opening lightbox");
        // Acquire before closing the menu so the lock never drops to zero in between.
        let scroll = self.scroll.acquire();
        let cancel_key = CancelKeyGuard::register(Rc::clone(&self.host));
        if self.exclusive {
            self.close_menu(CloseReason::Superseded);
        }
        self.lightbox = Some(Lightbox {
            index,
            item,
            _scroll: scroll,
            _cancel_key: cancel_key,
        });
        true
    }

    /// Closes the lightbox. Returns `false` if it was already closed.
    pub fn close_lightbox(&mut self, reason: CloseReason) -> bool {
        match self.lightbox.take() {
            Some(lightbox) => {
                tracing::debug!(item_id = lightbox.item.id, reason = ?reason, "closing lightbox");
                true
            }
            None => false,
        }
    }

    /// Delivers the cancel key. Acts only while the lightbox listener is live.
    pub fn cancel_key(&mut self) -> bool {
        if self.lightbox.is_none() {
            tracing::trace!("cancel key ignored, no listener registered");
            return false;
        }
        self.close_lightbox(CloseReason::CancelKey)
    }

    /// Opens the navigation menu. Returns `false` if it was already open.
    pub fn open_menu(&mut self) -> bool {
        if self.menu.is_some() {
            return false;
        }

        tracing::debug!("opening menu");
        let scroll = self.scroll.acquire();
        if self.exclusive {
            self.close_lightbox(CloseReason::Superseded);
        }
        self.menu = Some(MenuOverlay { _scroll: scroll });
        true
    }

    /// Closes the navigation menu. Returns `false` if it was already closed.
    pub fn close_menu(&mut self, reason: CloseReason) -> bool {
        if self.menu.take().is_some() {
            tracing::debug!(reason = ?reason, "closing menu");
            true
        } else {
            false
        }
    }

    /// Opens the menu if closed, closes it if open.
    pub fn toggle_menu(&mut self) -> bool {
        if self.menu.is_some() {
            self.close_menu(CloseReason::Button)
        } else {
            self.open_menu()
        }
    }

    /// Closes every overlay.
    pub fn close_all(&mut self, reason: CloseReason) {
        self.close_lightbox(reason);
        self.close_menu(reason);
    }

    /// Item shown in the lightbox, if open.
    #[must_use]
    pub fn selected_item(&self) -> Option<&PortfolioItem> {
        self.lightbox.as_ref().map(|lightbox| &lightbox.item)
    }

    /// Catalog index of the item shown in the lightbox, if open.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.lightbox.as_ref().map(|lightbox| lightbox.index)
    }

    #[must_use]
    pub fn lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Whether page scrolling is currently suspended by any overlay.
    #[must_use]
    pub fn scroll_suspended(&self) -> bool {
        self.scroll.is_engaged()
    }

    #[must_use]
    pub const fn exclusive(&self) -> bool {
        self.exclusive
    }
}

impl fmt::Debug for OverlayController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayController")
            .field("exclusive", &self.exclusive)
            .field("selected_item", &self.selected_item())
            .field("menu_open", &self.menu_open())
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::scope::RecordingHost;

    fn item(id: u32) -> PortfolioItem {
        PortfolioItem::new(id, format!("/images/{id}.jpg"), "35mm")
    }

    fn controller(exclusive: bool) -> (Rc<RecordingHost>, OverlayController) {
        let host = Rc::new(RecordingHost::new());
        let overlays = OverlayController::new(host.clone(), exclusive);
        (host, overlays)
    }

    #[test]
    fn replacing_payload_keeps_effects() {
        let (host, mut overlays) = controller(true);

        assert!(overlays.open_lightbox(0, item(1)));
        assert!(overlays.open_lightbox(1, item(2)));

        assert_eq!(overlays.selected_item().map(|i| i.id), Some(2));
        assert_eq!(overlays.selected_index(), Some(1));
        assert_eq!((host.suspends(), host.restores()), (1, 0));
        assert_eq!((host.listens(), host.unlistens()), (1, 0));
    }

    #[test]
    fn reopening_same_item_is_quiet() {
        let (_host, mut overlays) = controller(true);
        overlays.open_lightbox(3, item(4));
        assert!(!overlays.open_lightbox(3, item(4)));
    }

    #[test]
    fn every_close_path_is_balanced() {
        for reason in [CloseReason::Button, CloseReason::Backdrop, CloseReason::CancelKey] {
            let (host, mut overlays) = controller(true);
            overlays.open_lightbox(0, item(1));

            let closed = if reason == CloseReason::CancelKey {
                overlays.cancel_key()
            } else {
                overlays.close_lightbox(reason)
            };

            assert!(closed);
            assert_eq!((host.suspends(), host.restores()), (1, 1));
            assert_eq!((host.listens(), host.unlistens()), (1, 1));
        }
    }

    #[test]
    fn drop_while_open_releases_effects() {
        let (host, mut overlays) = controller(false);
        overlays.open_lightbox(0, item(1));
        overlays.open_menu();
        drop(overlays);

        assert_eq!((host.suspends(), host.restores()), (1, 1));
        assert_eq!((host.listens(), host.unlistens()), (1, 1));
    }

    #[test]
    fn cancel_key_without_lightbox_is_ignored() {
        let (host, mut overlays) = controller(true);
        overlays.open_menu();
        assert!(!overlays.cancel_key());
        assert!(overlays.menu_open());
        assert_eq!(host.listens(), 0);
    }

    #[test]
    fn exclusive_lightbox_closes_menu_without_scroll_flicker() {
        let (host, mut overlays) = controller(true);
        overlays.open_menu();
        overlays.open_lightbox(0, item(1));

        assert!(!overlays.menu_open());
        assert!(overlays.lightbox_open());
        assert_eq!((host.suspends(), host.restores()), (1, 0));
    }

    #[test]
    fn exclusive_menu_closes_lightbox() {
        let (host, mut overlays) = controller(true);
        overlays.open_lightbox(0, item(1));
        overlays.open_menu();

        assert!(!overlays.lightbox_open());
        assert!(!host.cancel_key_listening());
        assert!(host.scroll_suspended());
    }

    #[test]
    fn permissive_overlays_share_the_lock() {
        let (host, mut overlays) = controller(false);
        overlays.open_menu();
        overlays.open_lightbox(0, item(1));
        assert!(overlays.menu_open() && overlays.lightbox_open());

        overlays.close_lightbox(CloseReason::Button);
        assert!(host.scroll_suspended());
        overlays.close_menu(CloseReason::Button);
        assert!(!host.scroll_suspended());
        assert_eq!((host.suspends(), host.restores()), (1, 1));
    }

    #[test]
    fn toggle_menu_round_trip() {
        let (host, mut overlays) = controller(true);
        assert!(overlays.toggle_menu());
        assert!(overlays.menu_open());
        assert!(overlays.toggle_menu());
        assert!(!overlays.menu_open());
        assert!(!host.scroll_suspended());
    }
}
