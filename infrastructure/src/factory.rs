//! Default provider factory
//!
//! Maps configured settings to adapters. Mock variants are shared
//! instances so callers can inspect them after a run.

use crate::notifiers::{MockNotifier, SnsNotifier, SnsPublisher};
use crate::providers::{MockQuoteProvider, OpenAiQuoteProvider};
use async_trait::async_trait;
use quote_sender_application::{
    ConfigError, Notifier, NotifierSettings, ProviderFactory, QuoteProvider, QuoteProviderSettings,
};
use std::sync::Arc;
use tracing::info;

pub struct DefaultProviderFactory {
    mock_quote_provider: Arc<MockQuoteProvider>,
    mock_notifier: Arc<MockNotifier>,
    sns_publisher: Option<Arc<dyn SnsPublisher>>,
}

impl DefaultProviderFactory {
    pub fn new() -> Self {
        Self {
            mock_quote_provider: Arc::new(MockQuoteProvider::new()),
            mock_notifier: Arc::new(MockNotifier::new()),
            sns_publisher: None,
        }
    }

    /// Use `provider` whenever the mock quote provider is selected
    pub fn with_mock_quote_provider(mut self, provider: Arc<MockQuoteProvider>) -> Self {
        self.mock_quote_provider = provider;
        self
    }

    /// Use `notifier` whenever the mock notifier is selected
    pub fn with_mock_notifier(mut self, notifier: Arc<MockNotifier>) -> Self {
        self.mock_notifier = notifier;
        self
    }

    /// Publish through `publisher` instead of a real SNS client
    pub fn with_sns_publisher(mut self, publisher: Arc<dyn SnsPublisher>) -> Self {
        self.sns_publisher = Some(publisher);
        self
    }

    pub fn mock_quote_provider(&self) -> &Arc<MockQuoteProvider> {
        &self.mock_quote_provider
    }

    pub fn mock_notifier(&self) -> &Arc<MockNotifier> {
        &self.mock_notifier
    }
}

impl Default for DefaultProviderFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderFactory for DefaultProviderFactory {
    async fn quote_provider(
        &self,
        settings: &QuoteProviderSettings,
    ) -> Result<Arc<dyn QuoteProvider>, ConfigError> {
        match settings {
            QuoteProviderSettings::Mock => {
                info!("using mock AI provider");
                Ok(self.mock_quote_provider.clone())
            }
            QuoteProviderSettings::OpenAi(openai) => {
                info!(model = %openai.model, "using OpenAI provider");
                Ok(Arc::new(OpenAiQuoteProvider::new(openai)?))
            }
        }
    }

    async fn notifier(&self, settings: &NotifierSettings) -> Result<Arc<dyn Notifier>, ConfigError> {
        match settings {
            NotifierSettings::Mock => {
                info!("using mock notification provider");
                Ok(self.mock_notifier.clone())
            }
            NotifierSettings::Sns(sns) => {
                info!(region = %sns.region, topic_arn = %sns.topic_arn, "using SNS notification provider");
                let notifier = match &self.sns_publisher {
                    Some(publisher) => SnsNotifier::new(publisher.clone()),
                    None => SnsNotifier::from_settings(sns).await,
                };
                Ok(Arc::new(notifier))
            }
        }
    }
}
