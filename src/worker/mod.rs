//! Background loader thread for asynchronous resource fetching.
//!
//! This module implements the thread that fetches gallery resources so the
//! interaction thread never blocks on I/O. It uses `crossbeam-channel` for
//! cross-thread communication and carries distributed tracing context with
//! every request.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Loader implementation and the main-thread handle

pub mod handler;
pub mod messages;

pub use handler::{AssetLoader, LoaderHandle};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
