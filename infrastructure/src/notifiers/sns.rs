//! AWS SNS notifier
//!
//! Sends one SMS per recipient with an SNS `Publish` call addressed to the
//! phone number. Recipients are validated as E.164 before the backend is
//! contacted.

use crate::aws::load_sdk_config;
use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;
use quote_sender_application::{Notifier, NotifyError, SnsSettings};
use quote_sender_domain::{NotifierKind, PhoneNumber};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The single SNS operation the notifier needs
#[async_trait]
pub trait SnsPublisher: Send + Sync {
    /// Publish `message` as an SMS to `phone_number`
    async fn publish_sms(&self, phone_number: &str, message: &str) -> Result<(), String>;
}

#[async_trait]
impl SnsPublisher for aws_sdk_sns::Client {
    async fn publish_sms(&self, phone_number: &str, message: &str) -> Result<(), String> {
        let output = self
            .publish()
            .phone_number(phone_number)
            .message(message)
            .send()
            .await
            .map_err(|e| DisplayErrorContext(&e).to_string())?;

        debug!(message_id = ?output.message_id(), "SNS publish accepted");
        Ok(())
    }
}

pub struct SnsNotifier {
    publisher: Arc<dyn SnsPublisher>,
}

impl SnsNotifier {
    pub fn new(publisher: Arc<dyn SnsPublisher>) -> Self {
        Self { publisher }
    }

    /// Build a notifier backed by a real SNS client for `settings.region`
    pub async fn from_settings(settings: &SnsSettings) -> Self {
        let config = load_sdk_config(&settings.region, settings.profile.as_deref()).await;
        Self::new(Arc::new(aws_sdk_sns::Client::new(&config)))
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    fn kind(&self) -> NotifierKind {
        NotifierKind::Sns
    }

    async fn send(
        &self,
        recipient: &str,
        message: &str,
        cancellation: &CancellationToken,
    ) -> Result<(), NotifyError> {
        let phone = PhoneNumber::parse(recipient)?;

        let result = tokio::select! {
            biased;
            _ = cancellation.cancelled() => return Err(NotifyError::Cancelled),
            result = self.publisher.publish_sms(phone.as_str(), message) => result,
        };

        result.map_err(|e| NotifyError::Delivery(format!("failed to publish message to SNS: {}", e)))
    }
}
