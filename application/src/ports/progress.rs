//! Progress notification port
//!
//! Defines the interface for reporting what a run is doing. The use case
//! is handed one explicitly instead of logging through global state.

use super::notifier::NotifyError;
use crate::config::RunConfig;
use quote_sender_domain::{Quote, RunState};

/// Callback for progress updates during a run
///
/// Implementations live in the infrastructure layer (structured logging)
/// or in tests.
pub trait RunProgress: Send + Sync {
    /// Called on every state transition
    fn on_transition(&self, from: RunState, to: RunState);

    /// Called once the configuration has loaded
    fn on_config_loaded(&self, _config: &RunConfig) {}

    /// Called once the quote is available
    fn on_quote_generated(&self, _quote: &Quote) {}

    /// Called after each delivery attempt
    fn on_delivery(&self, _recipient: &str, _result: &Result<(), NotifyError>) {}
}

/// No-op progress for when reporting is not needed
pub struct NoProgress;

impl RunProgress for NoProgress {
    fn on_transition(&self, _from: RunState, _to: RunState) {}
}
