//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod config_source;
pub mod notifier;
pub mod progress;
pub mod provider_factory;
pub mod quote_provider;
