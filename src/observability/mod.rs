//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK → FileSpanExporter → folio-otlp.json
//! ```
//!
//! The trace file lives in the data directory (see
//! [`crate::infrastructure::get_data_dir`]), is written as one OTLP JSON
//! document per line and rotates at 10 MB keeping three backups.
//!
//! The filter level is taken from `RUST_LOG` first, then from the
//! `trace_level` configuration key, defaulting to `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{FileWriter, RotationPolicy};
pub use init::{init_tracing, TRACE_FILE};
