//! Tracing and logging setup shared by the storefront binaries.

pub mod tracing;

pub use self::tracing::{init, LogFormat};
