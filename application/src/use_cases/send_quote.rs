//! Send Quote use case
//!
//! Orchestrates one run: load configuration, build the providers, generate
//! a single quote and deliver it to every recipient in order. Delivery is
//! fail-fast: the first error ends the run and later recipients are never
//! attempted.

use crate::config::ConfigError;
use crate::ports::config_source::RunConfigSource;
use crate::ports::notifier::NotifyError;
use crate::ports::progress::{NoProgress, RunProgress};
use crate::ports::provider_factory::ProviderFactory;
use crate::ports::quote_provider::GenerationError;
use quote_sender_domain::{Quote, RunState};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Errors that end a run
#[derive(Error, Debug)]
pub enum SendQuoteError {
    #[error("failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to set up providers: {0}")]
    Providers(#[source] ConfigError),

    #[error("failed to generate quote: {0}")]
    Generation(#[from] GenerationError),

    #[error("failed to send quote to {recipient}: {source}")]
    Delivery {
        recipient: String,
        #[source]
        source: NotifyError,
    },
}

impl SendQuoteError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            SendQuoteError::Generation(GenerationError::Cancelled)
                | SendQuoteError::Delivery {
                    source: NotifyError::Cancelled,
                    ..
                }
        )
    }

    /// Recipient whose delivery failed, if any
    pub fn recipient(&self) -> Option<&str> {
        match self {
            SendQuoteError::Delivery { recipient, .. } => Some(recipient),
            _ => None,
        }
    }
}

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub quote: Quote,
    /// Recipients in delivery order
    pub delivered: Vec<String>,
}

/// Tracks the current [`RunState`] and reports each transition.
struct StateTracker<'a> {
    state: RunState,
    progress: &'a dyn RunProgress,
}

impl<'a> StateTracker<'a> {
    fn new(progress: &'a dyn RunProgress) -> Self {
        Self {
            state: RunState::Init,
            progress,
        }
    }

    fn advance(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        self.progress.on_transition(self.state, next);
        self.state = next;
    }
}

/// Use case for running one quote delivery
pub struct SendQuoteUseCase {
    config_source: Arc<dyn RunConfigSource>,
    providers: Arc<dyn ProviderFactory>,
    progress: Arc<dyn RunProgress>,
}

impl SendQuoteUseCase {
    pub fn new(config_source: Arc<dyn RunConfigSource>, providers: Arc<dyn ProviderFactory>) -> Self {
        Self {
            config_source,
            providers,
            progress: Arc::new(NoProgress),
        }
    }

    /// Set the progress handle
    pub fn with_progress(mut self, progress: Arc<dyn RunProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Execute one run.
    ///
    /// `cancellation` is handed to every outbound call; it is not polled
    /// between recipients.
    pub async fn execute(
        &self,
        cancellation: &CancellationToken,
    ) -> Result<RunOutcome, SendQuoteError> {
        let mut tracker = StateTracker::new(self.progress.as_ref());

        match self.run(&mut tracker, cancellation).await {
            Ok(outcome) => {
                tracker.advance(RunState::Done);
                Ok(outcome)
            }
            Err(e) => {
                tracker.advance(RunState::Failed);
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        tracker: &mut StateTracker<'_>,
        cancellation: &CancellationToken,
    ) -> Result<RunOutcome, SendQuoteError> {
        let config = self.config_source.load().await?;
        tracker.advance(RunState::ConfigLoaded);
        self.progress.on_config_loaded(&config);

        let quote_provider = self
            .providers
            .quote_provider(&config.quote_provider)
            .await
            .map_err(SendQuoteError::Providers)?;
        let notifier = self
            .providers
            .notifier(&config.notifier)
            .await
            .map_err(SendQuoteError::Providers)?;
        debug!(
            quote_provider = %quote_provider.kind(),
            notifier = %notifier.kind(),
            "Providers ready"
        );
        tracker.advance(RunState::ProviderReady);

        let quote = quote_provider.generate_quote(cancellation).await?;
        tracker.advance(RunState::QuoteGenerated);
        self.progress.on_quote_generated(&quote);

        tracker.advance(RunState::Delivering);
        let mut delivered = Vec::with_capacity(config.recipients().len());
        for recipient in config.recipients() {
            let result = notifier.send(recipient, quote.text(), cancellation).await;
            self.progress.on_delivery(recipient, &result);

            if let Err(source) = result {
                return Err(SendQuoteError::Delivery {
                    recipient: recipient.clone(),
                    source,
                });
            }
            delivered.push(recipient.clone());
        }

        Ok(RunOutcome { quote, delivered })
    }
}
