//! Notifier port
//!
//! Defines the interface for delivering a message to one recipient.

use async_trait::async_trait;
use quote_sender_domain::{DomainError, NotifierKind};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors that can occur while delivering a message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The recipient was rejected before contacting the backend
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("{0}")]
    Delivery(String),

    #[error("delivery cancelled")]
    Cancelled,
}

impl NotifyError {
    pub fn is_validation(&self) -> bool {
        matches!(self, NotifyError::Validation(_))
    }
}

/// Delivery of one message to one recipient
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Which variant this is
    fn kind(&self) -> NotifierKind;

    /// Send `message` to `recipient`
    async fn send(
        &self,
        recipient: &str,
        message: &str,
        cancellation: &CancellationToken,
    ) -> Result<(), NotifyError>;
}
