//! Structured run logging.
//!
//! Provides [`TracingProgress`], which implements the
//! [`RunProgress`](quote_sender_application::RunProgress) port by emitting
//! `tracing` events.

mod tracing_progress;

pub use tracing_progress::TracingProgress;
