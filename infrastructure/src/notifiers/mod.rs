//! Notifier adapters
//!
//! - [`MockNotifier`]: records the last message, no network access
//! - [`SnsNotifier`]: SMS delivery through AWS SNS

mod mock;
mod sns;

pub use mock::{MockNotifier, SentMessage};
pub use sns::{SnsNotifier, SnsPublisher};
