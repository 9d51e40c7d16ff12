//! Mock quote provider

use async_trait::async_trait;
use quote_sender_application::{GenerationError, QuoteProvider};
use quote_sender_domain::{Quote, QuoteProviderKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_util::sync::CancellationToken;

/// Quote returned by [`MockQuoteProvider`]
pub const MOCK_QUOTE: &str = "Sharing tea with a fascinating stranger is one of life's true delights.";

/// Quote provider that returns [`MOCK_QUOTE`] without any network access.
#[derive(Debug, Default)]
pub struct MockQuoteProvider {
    next_error: Option<GenerationError>,
    call_count: AtomicUsize,
}

impl MockQuoteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `error` from every call instead of the quote
    pub fn with_error(mut self, error: GenerationError) -> Self {
        self.next_error = Some(error);
        self
    }

    /// Number of times [`QuoteProvider::generate_quote`] was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteProvider for MockQuoteProvider {
    fn kind(&self) -> QuoteProviderKind {
        QuoteProviderKind::Mock
    }

    async fn generate_quote(
        &self,
        _cancellation: &CancellationToken,
    ) -> Result<Quote, GenerationError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.next_error {
            Some(error) => Err(error.clone()),
            None => Ok(Quote::from(MOCK_QUOTE)),
        }
    }
}
