//! Run configuration.
//!
//! - [`RunConfig`]: recipients plus the selected providers' settings
//! - [`QuoteProviderSettings`] / [`NotifierSettings`]: per-variant settings
//! - [`ConfigError`]: missing or invalid settings

mod run_config;

pub use run_config::{
    ApiKey, ConfigError, NotifierSettings, OpenAiSettings, QuoteProviderSettings, RunConfig,
    SnsSettings,
};
