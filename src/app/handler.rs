//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns host input (clicks,
//! drags, key presses, resizes) and resource load completions into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host or from the resource loader
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Exactly one state holder transitions (plus the preload cache when the
//!    carousel moves)
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `Resize`, `Remount`
//! - **Navigation**: `Next`, `Previous`, `GoTo`, `DragEnd`
//! - **Overlays**: `ActivateItem`, `ActivateCurrent`, `CloseButton`,
//!   `Backdrop`, `CancelKey`, `ToggleMenu`, `FollowLink`
//! - **Loader**: `ResourceLoaded`, `ResourceFailed`
//!
//! None of these can fail. Out-of-range indices, events for an overlay that
//! is not open and completions for stale requests are absorbed as no-ops.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use folio::app::{handle_event, modes::PageVariant, AppState, Event};
//! use folio::domain::{PortfolioItem, SiteInfo};
//! use folio::gallery::RecordingHost;
//! use folio::ui::Theme;
//!
//! let items = vec![
//!     PortfolioItem::new(1, "/images/a.jpg", "50mm"),
//!     PortfolioItem::new(2, "/images/b.jpg", "85mm"),
//! ];
//! let mut state = AppState::new(
//!     items,
//!     PageVariant::default(),
//!     SiteInfo::default(),
//!     Theme::default(),
//!     Rc::new(RecordingHost::new()),
//! );
//! handle_event(&mut state, &Event::Mount { width: 390 })?;
//! let (should_render, _actions) = handle_event(&mut state, &Event::Next)?;
//! assert!(should_render);
//! assert_eq!(state.navigator.current_index(), 1);
//! # Ok::<(), folio::FolioError>(())
//! ```

use super::modes::Section;
use super::{Action, AppState};
use crate::domain::error::Result;
use crate::gallery::{CloseReason, SwipeGesture};

/// Events triggered by host input or resource loader completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, so
/// transitions are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page appeared with the given viewport width.
    Mount {
        /// Viewport width in CSS pixels.
        width: u32,
    },

    /// The viewport width changed.
    Resize {
        /// Viewport width in CSS pixels.
        width: u32,
    },

    /// The page was torn down and mounted again at the given width.
    Remount {
        /// Viewport width in CSS pixels.
        width: u32,
    },

    /// Forward arrow: wraps or paginates depending on the navigator kind.
    Next,

    /// Backward arrow: wraps or paginates depending on the navigator kind.
    Previous,

    /// A navigation dot was clicked.
    GoTo(usize),

    /// A horizontal drag on the carousel was released.
    DragEnd {
        /// Horizontal distance travelled.
        offset: f64,
        /// Horizontal release velocity.
        velocity: f64,
    },

    /// A grid tile was clicked.
    ActivateItem(usize),

    /// The visible carousel slide was tapped.
    ActivateCurrent,

    /// The close button of the topmost overlay was clicked.
    CloseButton,

    /// The dimmed area around an overlay was clicked.
    Backdrop,

    /// The cancel key (Escape) was pressed.
    CancelKey,

    /// The hamburger button was clicked.
    ToggleMenu,

    /// A navigation link (header or menu) was followed.
    FollowLink(Section),

    /// The resource of an item finished loading.
    ResourceLoaded {
        /// Catalog position of the item.
        index: usize,
    },

    /// The resource of an item could not be loaded.
    ResourceFailed {
        /// Catalog position of the item.
        index: usize,
        /// Loader-provided description, for logging.
        reason: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`: whether the view model may have changed, and
/// the side effects for the host to perform in order.
///
/// # Errors
///
/// The gallery absorbs its own edge cases, so no event currently fails. The
/// `Result` keeps the host loop uniform with the other fallible calls it
/// makes.
///
/// # Tracing
///
/// Each call creates a debug-level span carrying the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mount { width } => Ok((true, state.mount(*width))),
        Event::Resize { width } => Ok(state.resize(*width)),
        Event::Remount { width } => {
            state.unmount();
            Ok((true, state.mount(*width)))
        }

        Event::Next => {
            let next = state.navigator.next();
            Ok(state.navigate(next))
        }
        Event::Previous => {
            let previous = state.navigator.previous();
            Ok(state.navigate(previous))
        }
        Event::GoTo(index) => {
            let target = state.navigator.go_to(*index);
            Ok(state.navigate(target))
        }
        Event::DragEnd { offset, velocity } => {
            let gesture = SwipeGesture::new(*offset, *velocity);
            let Some(direction) = gesture.direction(state.variant.swipe_threshold) else {
                tracing::debug!(confidence = gesture.confidence(), "swipe below threshold, snapping back");
                return Ok((false, vec![]));
            };
            tracing::debug!(confidence = gesture.confidence(), direction = ?direction, "swipe accepted");
            let target = state.navigator.paginate(direction);
            Ok(state.navigate(target))
        }

        Event::ActivateItem(index) => Ok(state.activate_item(*index)),
        Event::ActivateCurrent => {
            if state.items.is_empty() {
                return Ok((false, vec![]));
            }
            let index = state.navigator.current_index();
            Ok(state.activate_item(index))
        }

        Event::CloseButton => Ok((close_topmost(state, CloseReason::Button), vec![])),
        Event::Backdrop => Ok((close_topmost(state, CloseReason::Backdrop), vec![])),
        Event::CancelKey => Ok((state.overlays.cancel_key(), vec![])),

        Event::ToggleMenu => {
            if !state.menu_available() {
                tracing::debug!(
                    menu_enabled = state.variant.menu_enabled,
                    is_compact = state.viewport.is_compact,
                    "menu not offered in this layout"
                );
                return Ok((false, vec![]));
            }
            Ok((state.overlays.toggle_menu(), vec![]))
        }
        Event::FollowLink(section) => {
            let closed = state.overlays.close_menu(CloseReason::Navigation);
            let action = match section {
                Section::Contact => Action::OpenContact {
                    address: state.site.contact_email.clone(),
                },
                Section::Work | Section::About => Action::ScrollToSection { section: *section },
            };
            Ok((closed, vec![action]))
        }

        Event::ResourceLoaded { index } => {
            if *index >= state.items.len() {
                tracing::debug!(index, "load completion outside the catalog ignored");
                return Ok((false, vec![]));
            }
            Ok((state.preload.mark_loaded(*index), vec![]))
        }
        Event::ResourceFailed { index, reason } => {
            if *index >= state.items.len() {
                tracing::debug!(index, "load failure outside the catalog ignored");
                return Ok((false, vec![]));
            }
            tracing::warn!(index, reason = %reason, "resource failed to load");
            Ok((state.preload.mark_failed(*index), vec![]))
        }
    }
}

/// Closes the lightbox if it is open, otherwise the menu.
///
/// With permissive overlays both can be open; the lightbox is drawn above
/// the menu, so it is the one the click lands on.
fn close_topmost(state: &mut AppState, reason: CloseReason) -> bool {
    if state.overlays.lightbox_open() {
        state.overlays.close_lightbox(reason)
    } else {
        state.overlays.close_menu(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::PageVariant;
    use crate::domain::{PortfolioItem, SiteInfo};
    use crate::gallery::{NavigatorKind, RecordingHost};
    use crate::ui::Theme;
    use std::rc::Rc;

    fn mounted(count: u32, variant: PageVariant, width: u32) -> (AppState, Rc<RecordingHost>) {
        let host = Rc::new(RecordingHost::new());
        let items = (1..=count)
            .map(|id| PortfolioItem::new(id, format!("/images/{id}.jpg"), "35mm"))
            .collect();
        let mut state = AppState::new(
            items,
            variant,
            SiteInfo::default(),
            Theme::default(),
            host.clone(),
        );
        handle_event(&mut state, &Event::Mount { width }).unwrap();
        (state, host)
    }

    fn wrapping() -> PageVariant {
        PageVariant {
            navigator: NavigatorKind::Wrapping,
            ..PageVariant::default()
        }
    }

    #[test]
    fn wrapping_next_from_last_returns_to_first() {
        let (mut state, _host) = mounted(8, wrapping(), 390);
        handle_event(&mut state, &Event::GoTo(7)).unwrap();
        handle_event(&mut state, &Event::Next).unwrap();
        assert_eq!(state.navigator.current_index(), 0);
    }

    #[test]
    fn clamping_next_at_last_is_a_no_op() {
        let (mut state, _host) = mounted(3, PageVariant::default(), 390);
        handle_event(&mut state, &Event::GoTo(2)).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Next).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.navigator.current_index(), 2);
    }

    #[test]
    fn confident_swipes_paginate_and_weak_ones_snap_back() {
        let (mut state, _host) = mounted(5, PageVariant::default(), 390);

        let drag = Event::DragEnd { offset: -50.0, velocity: -300.0 };
        handle_event(&mut state, &drag).unwrap();
        assert_eq!(state.navigator.current_index(), 1);

        let drag = Event::DragEnd { offset: 50.0, velocity: 300.0 };
        handle_event(&mut state, &drag).unwrap();
        assert_eq!(state.navigator.current_index(), 0);

        let weak = Event::DragEnd { offset: 5.0, velocity: 10.0 };
        assert_eq!(handle_event(&mut state, &weak).unwrap(), (false, vec![]));
    }

    #[test]
    fn index_change_requests_only_new_neighbours() {
        let (mut state, _host) = mounted(10, wrapping(), 390);
        let (_, actions) = handle_event(&mut state, &Event::Next).unwrap();
        let indices: Vec<usize> = actions
            .iter()
            .filter_map(|action| match action {
                Action::LoadResource { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![2]);
    }

    #[test]
    fn cancel_key_is_ignored_while_lightbox_closed() {
        let (mut state, host) = mounted(3, PageVariant::default(), 1280);
        assert_eq!(handle_event(&mut state, &Event::CancelKey).unwrap(), (false, vec![]));

        handle_event(&mut state, &Event::ActivateItem(1)).unwrap();
        assert!(host.cancel_key_listening());
        let (render, _) = handle_event(&mut state, &Event::CancelKey).unwrap();
        assert!(render);
        assert!(!host.cancel_key_listening());
        assert!(!host.scroll_suspended());
    }

    #[test]
    fn activating_another_item_replaces_the_payload_directly() {
        let (mut state, host) = mounted(4, PageVariant::default(), 1280);
        handle_event(&mut state, &Event::ActivateItem(0)).unwrap();
        handle_event(&mut state, &Event::ActivateItem(3)).unwrap();

        assert_eq!(state.overlays.selected_index(), Some(3));
        assert_eq!(host.suspends(), 1);
        assert_eq!(host.restores(), 0);
        assert_eq!(host.listens(), 1);
    }

    #[test]
    fn menu_is_ignored_in_wide_layout_or_when_disabled() {
        let (mut state, _host) = mounted(3, PageVariant::default(), 1280);
        assert_eq!(handle_event(&mut state, &Event::ToggleMenu).unwrap(), (false, vec![]));

        let variant = PageVariant {
            menu_enabled: false,
            ..PageVariant::default()
        };
        let (mut state, _host) = mounted(3, variant, 390);
        assert_eq!(handle_event(&mut state, &Event::ToggleMenu).unwrap(), (false, vec![]));
        assert!(!state.overlays.menu_open());
    }

    #[test]
    fn following_a_menu_link_closes_the_menu() {
        let (mut state, host) = mounted(3, PageVariant::default(), 390);
        handle_event(&mut state, &Event::ToggleMenu).unwrap();
        assert!(host.scroll_suspended());

        let (render, actions) = handle_event(&mut state, &Event::FollowLink(Section::About)).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::ScrollToSection {
                section: Section::About
            }]
        );
        assert!(!host.scroll_suspended());

        let (_, actions) = handle_event(&mut state, &Event::FollowLink(Section::Contact)).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenContact {
                address: "mamin.create@gmail.com".to_string()
            }]
        );
    }

    #[test]
    fn stale_and_out_of_range_completions_are_harmless() {
        let (mut state, _host) = mounted(3, PageVariant::default(), 390);
        assert_eq!(
            handle_event(&mut state, &Event::ResourceLoaded { index: 42 }).unwrap(),
            (false, vec![])
        );

        handle_event(&mut state, &Event::Remount { width: 390 }).unwrap();
        handle_event(&mut state, &Event::ResourceLoaded { index: 0 }).unwrap();
        handle_event(&mut state, &Event::ResourceLoaded { index: 0 }).unwrap();
        assert!(state.preload.is_loaded(0));
    }

    #[test]
    fn failed_resource_is_requested_again_on_revisit() {
        let (mut state, _host) = mounted(5, PageVariant::default(), 390);
        handle_event(
            &mut state,
            &Event::ResourceFailed { index: 1, reason: "missing".to_string() },
        )
        .unwrap();

        handle_event(&mut state, &Event::GoTo(3)).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::GoTo(2)).unwrap();
        assert!(actions.iter().any(|action| matches!(action, Action::LoadResource { index: 1, .. })));
    }

    #[test]
    fn remount_balances_host_calls() {
        let (mut state, host) = mounted(3, PageVariant::default(), 390);
        handle_event(&mut state, &Event::ActivateCurrent).unwrap();
        handle_event(&mut state, &Event::Remount { width: 1280 }).unwrap();

        assert_eq!(host.suspends(), host.restores());
        assert_eq!(host.listens(), host.unlistens());
        assert!(state.compute_viewmodel().lightbox.is_none());
    }
}
