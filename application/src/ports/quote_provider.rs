//! Quote provider port
//!
//! Defines the interface for services that generate the run's quote.

use async_trait::async_trait;
use quote_sender_domain::{Quote, QuoteProviderKind};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors that can occur while generating a quote
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("quote request failed: {0}")]
    RequestFailed(String),

    #[error("no quote generated")]
    EmptyResponse,

    #[error("quote generation cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

/// Generator of one quote per run
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Which variant this is
    fn kind(&self) -> QuoteProviderKind;

    /// Generate a quote.
    ///
    /// Adapters that make outbound calls abort with
    /// [`GenerationError::Cancelled`] when `cancellation` fires.
    async fn generate_quote(
        &self,
        cancellation: &CancellationToken,
    ) -> Result<Quote, GenerationError>;
}
