//! Provider factory port
//!
//! Turns configured settings into ready-to-use adapters.

use super::notifier::Notifier;
use super::quote_provider::QuoteProvider;
use crate::config::{ConfigError, NotifierSettings, QuoteProviderSettings};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ProviderFactory: Send + Sync {
    /// Build the quote provider selected by `settings`
    async fn quote_provider(
        &self,
        settings: &QuoteProviderSettings,
    ) -> Result<Arc<dyn QuoteProvider>, ConfigError>;

    /// Build the notifier selected by `settings`
    async fn notifier(&self, settings: &NotifierSettings) -> Result<Arc<dyn Notifier>, ConfigError>;
}
