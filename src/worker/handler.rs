//! Loader thread implementation for asynchronous resource fetching.
//!
//! Page state lives on the main thread and must never block on I/O. Resource
//! loads are posted to a background thread over a `crossbeam-channel`
//! channel; the thread answers every request with exactly one
//! [`WorkerResponse`]. Requests are never cancelled, so a response may arrive
//! for an index the page no longer shows. The page state absorbs those.

use crate::domain::error::{FolioError, Result};
use crate::infrastructure::paths;
use crate::worker::{WorkerMessage, WorkerResponse};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Resolves resource locators against an asset root and checks the files.
#[derive(Debug, Clone)]
pub struct AssetLoader {
    asset_root: PathBuf,
}

impl AssetLoader {
    #[must_use]
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
        }
    }

    /// Fetches one resource. Only regular files count as loaded.
    fn load(&self, index: usize, item_id: u32, src: &str) -> WorkerResponse {
        let path = paths::resolve_asset(&self.asset_root, src);

        match std::fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {
                tracing::debug!(index, item_id, path = %path.display(), bytes = metadata.len(), "resource loaded");
                WorkerResponse::Loaded {
                    index,
                    item_id,
                    bytes: metadata.len(),
                }
            }
            Ok(_) => {
                tracing::debug!(index, item_id, path = %path.display(), "resource is not a file");
                WorkerResponse::Failed {
                    index,
                    item_id,
                    reason: format!("{} is not a file", path.display()),
                }
            }
            Err(e) => {
                tracing::debug!(index, item_id, path = %path.display(), error = %e, "resource load failed");
                WorkerResponse::Failed {
                    index,
                    item_id,
                    reason: format!("{}: {e}", path.display()),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Reconstructs the OpenTelemetry context from the trace information in
    /// the message, so spans created here are linked to the requesting span.
    /// Returns a guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let WorkerMessage::Load {
            trace_context: Some(trace_context),
            ..
        } = message
        else {
            return None;
        };

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes one message.
    ///
    /// Returns `None` for [`WorkerMessage::Shutdown`].
    pub fn handle_message(&self, message: WorkerMessage) -> Option<WorkerResponse> {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("loader_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::Load {
                index, item_id, src, ..
            } => Some(self.load(index, item_id, &src)),
            WorkerMessage::Shutdown => None,
        }
    }
}

/// Main-thread side of the loader thread.
///
/// Dropping the handle asks the thread to stop and joins it.
#[derive(Debug)]
pub struct LoaderHandle {
    requests: Sender<WorkerMessage>,
    responses: Receiver<WorkerResponse>,
    in_flight: usize,
    thread: Option<JoinHandle<()>>,
}

impl LoaderHandle {
    /// Starts the loader thread.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Loader`] if the thread cannot be spawned.
    pub fn spawn(loader: AssetLoader) -> Result<Self> {
        let (request_tx, request_rx) = unbounded::<WorkerMessage>();
        let (response_tx, response_rx) = unbounded::<WorkerResponse>();

        let thread = thread::Builder::new()
            .name("folio-loader".to_string())
            .spawn(move || {
                while let Ok(message) = request_rx.recv() {
                    let Some(response) = loader.handle_message(message) else {
                        break;
                    };
                    if response_tx.send(response).is_err() {
                        break;
                    }
                }
                tracing::debug!("loader thread stopped");
            })
            .map_err(|e| FolioError::Loader(format!("failed to spawn loader thread: {e}")))?;

        Ok(Self {
            requests: request_tx,
            responses: response_rx,
            in_flight: 0,
            thread: Some(thread),
        })
    }

    /// Queues a request.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Loader`] if the loader thread has gone away.
    pub fn post(&mut self, message: WorkerMessage) -> Result<()> {
        let counts = matches!(message, WorkerMessage::Load { .. });
        self.requests
            .send(message)
            .map_err(|e| FolioError::Loader(format!("loader thread disconnected: {e}")))?;
        if counts {
            self.in_flight += 1;
        }
        Ok(())
    }

    /// Requests that have not been answered yet.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Blocks until every posted request is answered or `timeout` passes
    /// without a response.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Loader`] if the loader thread died with
    /// requests outstanding.
    pub fn wait_idle(&mut self, timeout: Duration) -> Result<Vec<WorkerResponse>> {
        let mut responses = Vec::with_capacity(self.in_flight);

        while self.in_flight > 0 {
            match self.responses.recv_timeout(timeout) {
                Ok(response) => {
                    self.in_flight -= 1;
                    responses.push(response);
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(in_flight = self.in_flight, "loader did not answer in time");
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(FolioError::Loader(format!(
                        "loader thread stopped with {} requests outstanding",
                        self.in_flight
                    )));
                }
            }
        }

        Ok(responses)
    }
}

impl Drop for LoaderHandle {
    fn drop(&mut self) {
        let _ = self.requests.send(WorkerMessage::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
