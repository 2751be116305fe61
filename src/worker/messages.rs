//! Loader thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! thread, which owns all page state, and the background thread that fetches
//! resources. It also carries distributed tracing context across the thread
//! boundary so loader spans link to the span that requested them.

use crate::app::Event;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the loader thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid, which is the
    /// case whenever tracing is not initialised.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id = format!("{:032x}", span_context.trace_id());
            let parent_span_id = format!("{:016x}", span_context.span_id());

            tracing::trace!(trace_id = %trace_id, parent_span_id = %parent_span_id, "capturing trace context");

            Some(Self {
                trace_id,
                parent_span_id,
            })
        } else {
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load(Load { index: usize, item_id: u32, src: String }),
}

/// Messages sent from the main thread to the loader thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the resource of one catalog item.
    Load {
        /// Catalog position, echoed back in the response.
        index: usize,

        /// Item identifier, for logging.
        item_id: u32,

        /// Resource locator from the catalog.
        src: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Stop the loader thread after the queued requests.
    Shutdown,
}

/// Responses sent from the loader thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The resource exists and was read.
    Loaded {
        /// Catalog position from the request.
        index: usize,

        /// Item identifier from the request.
        item_id: u32,

        /// Size of the resource in bytes.
        bytes: u64,
    },

    /// The resource could not be fetched.
    Failed {
        /// Catalog position from the request.
        index: usize,

        /// Item identifier from the request.
        item_id: u32,

        /// Human-readable reason.
        reason: String,
    },
}

impl WorkerResponse {
    /// Catalog position the response refers to.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Loaded { index, .. } | Self::Failed { index, .. } => *index,
        }
    }

    /// Converts the response into the event the page state consumes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio::app::Event;
    /// use folio::worker::WorkerResponse;
    ///
    /// let response = WorkerResponse::Loaded { index: 2, item_id: 3, bytes: 1024 };
    /// assert_eq!(response.into_event(), Event::ResourceLoaded { index: 2 });
    /// ```
    #[must_use]
    pub fn into_event(self) -> Event {
        match self {
            Self::Loaded { index, .. } => Event::ResourceLoaded { index },
            Self::Failed { index, reason, .. } => Event::ResourceFailed { index, reason },
        }
    }
}
