//! Logging abstractions
//!
//! Runtime-agnostic logging so the core can run inside any host platform:
//! - `NoOpLogger`: silent logger for testing
//! - `ConsoleLogger`: logs to stdout/stderr
//! - host adapters: forward to the platform's own logging channel

mod traits;
mod console;
mod noop;

pub use traits::{Logger, SharedLogger};
pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
