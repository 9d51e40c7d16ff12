//! Infrastructure layer for quote-sender
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including environment configuration loading.

pub mod aws;
pub mod config;
pub mod factory;
pub mod logging;
pub mod notifiers;
pub mod providers;

// Re-export commonly used types
pub use config::{AwsCredentialChain, BackendCredentials, EnvConfigLoader, EnvSource, load_dotenv};
pub use factory::DefaultProviderFactory;
pub use logging::TracingProgress;
pub use notifiers::{MockNotifier, SentMessage, SnsNotifier, SnsPublisher};
pub use providers::{MOCK_QUOTE, MockQuoteProvider, OpenAiQuoteProvider};
