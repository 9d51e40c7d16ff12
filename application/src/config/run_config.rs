//! Run configuration model

use quote_sender_domain::{Model, NotifierKind, QuoteProviderKind};
use thiserror::Error;

/// Errors raised while building a [`RunConfig`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("recipients required")]
    RecipientsRequired,

    #[error("api key required")]
    ApiKeyRequired,

    #[error("{0} required")]
    MissingSetting(&'static str),

    #[error("backend credentials unavailable: {0}")]
    CredentialsUnavailable(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// An API credential. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting blank values
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::ApiKeyRequired);
        }
        Ok(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Settings for the OpenAI chat completions provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiSettings {
    pub api_key: ApiKey,
    pub model: Model,
    pub base_url: String,
}

impl OpenAiSettings {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com";

    pub fn new(api_key: ApiKey, model: Model) -> Self {
        Self {
            api_key,
            model,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Settings for the selected quote provider
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuoteProviderSettings {
    #[default]
    Mock,
    OpenAi(OpenAiSettings),
}

impl QuoteProviderSettings {
    pub fn kind(&self) -> QuoteProviderKind {
        match self {
            QuoteProviderSettings::Mock => QuoteProviderKind::Mock,
            QuoteProviderSettings::OpenAi(_) => QuoteProviderKind::OpenAi,
        }
    }
}

/// Settings for the AWS SNS notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnsSettings {
    pub topic_arn: String,
    pub region: String,
    pub profile: Option<String>,
}

impl SnsSettings {
    pub const DEFAULT_REGION: &'static str = "us-east-2";

    /// Build SNS settings, rejecting a blank topic ARN
    pub fn new(topic_arn: impl Into<String>) -> Result<Self, ConfigError> {
        let topic_arn = topic_arn.into();
        if topic_arn.trim().is_empty() {
            return Err(ConfigError::MissingSetting("sns topic arn"));
        }
        Ok(Self {
            topic_arn,
            region: Self::DEFAULT_REGION.to_string(),
            profile: None,
        })
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }
}

/// Settings for the selected notifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotifierSettings {
    #[default]
    Mock,
    Sns(SnsSettings),
}

impl NotifierSettings {
    pub fn kind(&self) -> NotifierKind {
        match self {
            NotifierSettings::Mock => NotifierKind::Mock,
            NotifierSettings::Sns(_) => NotifierKind::Sns,
        }
    }
}

/// Configuration for one run.
///
/// Built once at startup and read-only afterwards. The recipient list is
/// never empty and the selected providers' required settings are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    recipients: Vec<String>,
    pub quote_provider: QuoteProviderSettings,
    pub notifier: NotifierSettings,
}

impl RunConfig {
    pub fn new(
        recipients: Vec<String>,
        quote_provider: QuoteProviderSettings,
        notifier: NotifierSettings,
    ) -> Result<Self, ConfigError> {
        if recipients.is_empty() {
            return Err(ConfigError::RecipientsRequired);
        }
        Ok(Self {
            recipients,
            quote_provider,
            notifier,
        })
    }

    /// Split a comma-delimited recipient list.
    ///
    /// Segments are trimmed and blank ones dropped; order and duplicates
    /// are preserved.
    pub fn parse_recipients(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recipients_drops_empty_segments() {
        let recipients = RunConfig::parse_recipients("+1234567890,,+1987654321");
        assert_eq!(recipients, vec!["+1234567890", "+1987654321"]);
    }

    #[test]
    fn parse_recipients_trims_and_keeps_order_and_duplicates() {
        let recipients = RunConfig::parse_recipients(" +3 , +1,+2 ,  , +1 ,");
        assert_eq!(recipients, vec!["+3", "+1", "+2", "+1"]);
    }

    #[test]
    fn parse_recipients_blank_input_is_empty() {
        assert!(RunConfig::parse_recipients("").is_empty());
        assert!(RunConfig::parse_recipients(" , ,").is_empty());
    }

    #[test]
    fn run_config_requires_recipients() {
        let err = RunConfig::new(vec![], QuoteProviderSettings::Mock, NotifierSettings::Mock)
            .unwrap_err();
        assert_eq!(err, ConfigError::RecipientsRequired);
        assert_eq!(err.to_string(), "recipients required");
    }

    #[test]
    fn api_key_rejects_blank() {
        assert_eq!(ApiKey::new("   ").unwrap_err(), ConfigError::ApiKeyRequired);
        assert_eq!(ApiKey::new("").unwrap_err().to_string(), "api key required");
    }

    #[test]
    fn api_key_is_redacted_in_debug() {
        let settings = OpenAiSettings::new(ApiKey::new("sk-secret").unwrap(), Model::default());
        let debug = format!("{settings:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("ApiKey(***)"));
        assert_eq!(settings.api_key.expose(), "sk-secret");
    }

    #[test]
    fn sns_settings_require_topic() {
        let err = SnsSettings::new(" ").unwrap_err();
        assert_eq!(err, ConfigError::MissingSetting("sns topic arn"));
        assert_eq!(err.to_string(), "sns topic arn required");

        let settings = SnsSettings::new("arn:aws:sns:us-east-2:123456789012:quotes").unwrap();
        assert_eq!(settings.region, "us-east-2");
        assert_eq!(settings.profile, None);
    }

    #[test]
    fn settings_report_their_kind() {
        assert_eq!(QuoteProviderSettings::Mock.kind(), QuoteProviderKind::Mock);
        let openai = QuoteProviderSettings::OpenAi(OpenAiSettings::new(
            ApiKey::new("k").unwrap(),
            Model::default(),
        ));
        assert_eq!(openai.kind(), QuoteProviderKind::OpenAi);

        let sns = NotifierSettings::Sns(SnsSettings::new("arn").unwrap());
        assert_eq!(sns.kind(), NotifierKind::Sns);
    }
}
