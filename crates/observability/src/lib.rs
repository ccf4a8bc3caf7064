//! Tracing and logging (shared setup).

pub mod tracing;

pub use self::tracing::{LogFormat, init};
