//! Mock notifier

use async_trait::async_trait;
use quote_sender_application::{Notifier, NotifyError};
use quote_sender_domain::NotifierKind;
use std::sync::{Mutex, PoisonError};
use tokio_util::sync::CancellationToken;

/// A message accepted by [`MockNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub recipient: String,
    pub message: String,
}

/// Notifier that remembers only the most recent send.
#[derive(Debug, Default)]
pub struct MockNotifier {
    should_error: bool,
    last: Mutex<Option<SentMessage>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every send fails with `mock notification error`
    pub fn failing() -> Self {
        Self {
            should_error: true,
            ..Self::default()
        }
    }

    /// The last successfully sent message
    pub fn last_sent(&self) -> Option<SentMessage> {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    fn kind(&self) -> NotifierKind {
        NotifierKind::Mock
    }

    async fn send(
        &self,
        recipient: &str,
        message: &str,
        _cancellation: &CancellationToken,
    ) -> Result<(), NotifyError> {
        if self.should_error {
            return Err(NotifyError::Delivery("mock notification error".to_string()));
        }

        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(SentMessage {
            recipient: recipient.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn successful_notification() {
        let notifier = MockNotifier::new();

        notifier
            .send("+1234567890", "Test message", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            notifier.last_sent(),
            Some(SentMessage {
                recipient: "+1234567890".to_string(),
                message: "Test message".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn second_send_overwrites_first() {
        let notifier = MockNotifier::new();
        let token = CancellationToken::new();

        notifier.send("+1111111111", "first", &token).await.unwrap();
        notifier.send("+2222222222", "second", &token).await.unwrap();

        let last = notifier.last_sent().unwrap();
        assert_eq!(last.recipient, "+2222222222");
        assert_eq!(last.message, "second");
    }

    #[tokio::test]
    async fn error_case_records_nothing() {
        let notifier = MockNotifier::failing();

        let err = notifier
            .send("+1234567890", "Test message", &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "mock notification error");
        assert_eq!(notifier.last_sent(), None);
    }

    #[tokio::test]
    async fn accepts_any_recipient_format() {
        let notifier = MockNotifier::new();

        notifier
            .send("not-a-number", "hi", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(notifier.last_sent().unwrap().recipient, "not-a-number");
    }
}
