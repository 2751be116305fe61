//! Actions representing side effects to be executed by the host.
//!
//! The event handler never performs I/O. Anything that leaves the state
//! model (fetching an image, scrolling the document, following the contact
//! link) is returned as an [`Action`] for the host to carry out. Scroll
//! suspension and the cancel-key listener are the exception: those are held
//! by RAII guards inside the overlay controller, so they cannot be forgotten.
//!
//! # Example
//!
//! ```rust
//! use folio::app::Action;
//! use folio::app::modes::Section;
//!
//! let actions = vec![
//!     Action::LoadResource { index: 1, item_id: 2, src: "/images/cathedral.jpg".to_string() },
//!     Action::ScrollToSection { section: Section::About },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use super::modes::Section;
use serde::Serialize;

/// Commands produced by [`handle_event`](super::handle_event) for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Starts fetching the resource of one item.
    ///
    /// The host reports the outcome back as `Event::ResourceLoaded` or
    /// `Event::ResourceFailed`. Requests are never cancelled.
    LoadResource {
        /// Position of the item in the catalog.
        index: usize,
        /// Identifier of the item, for logging.
        item_id: u32,
        /// Opaque resource locator, passed through untouched.
        src: String,
    },

    /// Scrolls the document to an anchored section.
    ScrollToSection {
        /// Anchor to scroll to.
        section: Section,
    },

    /// Opens the contact mail link.
    OpenContact {
        /// Address placed after `mailto:`.
        address: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn actions_serialise_with_named_fields() {
        let scroll = serde_json::to_value(Action::ScrollToSection {
            section: Section::About,
        })
        .unwrap();
        assert_eq!(scroll, json!({ "action": "scroll_to_section", "section": "about" }));

        let load = serde_json::to_value(Action::LoadResource {
            index: 2,
            item_id: 3,
            src: "/images/cave.jpg".to_string(),
        })
        .unwrap();
        assert_eq!(
            load,
            json!({ "action": "load_resource", "index": 2, "item_id": 3, "src": "/images/cave.jpg" })
        );
    }
}
