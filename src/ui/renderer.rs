//! Top-level rendering coordinator.
//!
//! This module provides the rendering entry points, coordinating view model
//! computation and delegation to page components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `PageViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Frames are returned as strings; the host decides where they go.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PageViewModel;

/// Output format of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameFormat {
    /// ANSI-styled text for a terminal.
    #[default]
    Ansi,
    /// One JSON document per frame.
    Json,
}

/// Renders the current state as one frame.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `cols` - Terminal width in columns (ignored for JSON)
/// * `format` - Output format
///
/// # Errors
///
/// Returns [`FolioError::Config`](crate::FolioError::Config) if the view model
/// cannot be serialised, which only happens for JSON output.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use folio::app::{modes::PageVariant, AppState};
/// use folio::domain::SiteInfo;
/// use folio::gallery::RecordingHost;
/// use folio::ui::{render, FrameFormat, Theme};
///
/// let mut state = AppState::new(vec![], PageVariant::default(), SiteInfo::default(), Theme::default(), Rc::new(RecordingHost::new()));
/// state.mount(1280);
/// let frame = render(&state, 80, FrameFormat::Ansi)?;
/// assert!(frame.contains("ma."));
/// # Ok::<(), folio::FolioError>(())
/// ```
pub fn render(state: &AppState, cols: usize, format: FrameFormat) -> crate::Result<String> {
    let viewmodel = state.compute_viewmodel();

    match format {
        FrameFormat::Ansi => Ok(render_viewmodel(&viewmodel, &state.theme, cols)),
        FrameFormat::Json => serde_json::to_string(&viewmodel)
            .map_err(|e| crate::FolioError::Config(format!("failed to serialise frame: {e}"))),
    }
}

/// Renders a view model as ANSI text.
///
/// An open overlay covers the page, as a modal does; otherwise the full
/// page is drawn.
#[must_use]
pub fn render_viewmodel(vm: &PageViewModel, theme: &Theme, cols: usize) -> String {
    let mut canvas = Canvas::new(cols);

    if !components::render_overlay(&mut canvas, vm, theme) {
        components::render_page(&mut canvas, vm, theme);
    }

    let frame = canvas.into_string();
    match &theme.colors.page_bg {
        Some(bg) => {
            let bg = Theme::bg(bg);
            let frame = frame.replace(Theme::reset(), &format!("{}{bg}", Theme::reset()));
            format!("{bg}{frame}{}", Theme::reset())
        }
        None => frame,
    }
}
