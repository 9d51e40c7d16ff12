//! Application layer for quote-sender
//!
//! This crate contains the send-quote use case, port definitions, and the
//! run configuration model. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigError, NotifierSettings, OpenAiSettings, QuoteProviderSettings, RunConfig,
    SnsSettings,
};
pub use ports::{
    config_source::RunConfigSource,
    notifier::{Notifier, NotifyError},
    progress::{NoProgress, RunProgress},
    provider_factory::ProviderFactory,
    quote_provider::{GenerationError, QuoteProvider},
};
pub use use_cases::send_quote::{RunOutcome, SendQuoteError, SendQuoteUseCase};
