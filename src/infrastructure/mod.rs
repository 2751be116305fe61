//! Infrastructure layer for filesystem and environment interactions.
//!
//! Everything that depends on the machine the driver runs on (environment
//! variables, directory layout) lives here, so the gallery core stays pure.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_asset};
