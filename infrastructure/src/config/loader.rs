//! Run configuration loader backed by environment variables

use super::credentials::BackendCredentials;
use super::env_source::EnvSource;
use async_trait::async_trait;
use quote_sender_application::{
    ApiKey, ConfigError, NotifierSettings, OpenAiSettings, QuoteProviderSettings, RunConfig,
    RunConfigSource, SnsSettings,
};
use quote_sender_domain::{Model, NotifierKind, QuoteProviderKind};
use std::sync::Arc;

/// Recognized environment variable names
pub mod keys {
    pub const RECIPIENT_PHONE_NUMBERS: &str = "RECIPIENT_PHONE_NUMBERS";
    pub const AI_PROVIDER: &str = "AI_PROVIDER";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    pub const NOTIFICATION_PROVIDER: &str = "NOTIFICATION_PROVIDER";
    pub const SNS_TOPIC_ARN: &str = "SNS_TOPIC_ARN";
    pub const AWS_REGION: &str = "AWS_REGION";
    pub const AWS_PROFILE: &str = "AWS_PROFILE";
}

/// Loads a [`RunConfig`] from an [`EnvSource`].
///
/// When a credential check is attached it runs first, regardless of which
/// providers are selected.
pub struct EnvConfigLoader {
    env: EnvSource,
    credentials: Option<Arc<dyn BackendCredentials>>,
}

impl EnvConfigLoader {
    pub fn new(env: EnvSource) -> Self {
        Self {
            env,
            credentials: None,
        }
    }

    /// Require backend credentials to resolve before loading succeeds
    pub fn with_credential_check(mut self, credentials: Arc<dyn BackendCredentials>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Build the configuration from the environment without touching the
    /// network
    pub fn build(&self) -> Result<RunConfig, ConfigError> {
        let quote_provider = self.quote_provider_settings()?;
        let notifier = self.notifier_settings()?;

        let recipients = self
            .env
            .get(keys::RECIPIENT_PHONE_NUMBERS)
            .map(RunConfig::parse_recipients)
            .unwrap_or_default();

        RunConfig::new(recipients, quote_provider, notifier)
    }

    fn quote_provider_settings(&self) -> Result<QuoteProviderSettings, ConfigError> {
        match QuoteProviderKind::from_selection(self.env.get(keys::AI_PROVIDER)) {
            QuoteProviderKind::Mock => Ok(QuoteProviderSettings::Mock),
            QuoteProviderKind::OpenAi => {
                let api_key = ApiKey::new(self.env.get(keys::OPENAI_API_KEY).unwrap_or_default())?;
                let model: Model = self
                    .env
                    .get(keys::OPENAI_MODEL)
                    .unwrap_or_default()
                    .parse()
                    .unwrap_or_default();
                let base_url = self
                    .env
                    .get_or(keys::OPENAI_BASE_URL, OpenAiSettings::DEFAULT_BASE_URL);

                Ok(QuoteProviderSettings::OpenAi(
                    OpenAiSettings::new(api_key, model).with_base_url(base_url),
                ))
            }
        }
    }

    fn notifier_settings(&self) -> Result<NotifierSettings, ConfigError> {
        match NotifierKind::from_selection(self.env.get(keys::NOTIFICATION_PROVIDER)) {
            NotifierKind::Mock => Ok(NotifierSettings::Mock),
            NotifierKind::Sns => {
                let settings = SnsSettings::new(self.env.get(keys::SNS_TOPIC_ARN).unwrap_or_default())?
                    .with_region(self.env.get_or(keys::AWS_REGION, SnsSettings::DEFAULT_REGION))
                    .with_profile(self.env.get(keys::AWS_PROFILE).map(String::from));
                Ok(NotifierSettings::Sns(settings))
            }
        }
    }
}

#[async_trait]
impl RunConfigSource for EnvConfigLoader {
    async fn load(&self) -> Result<RunConfig, ConfigError> {
        if let Some(credentials) = &self.credentials {
            credentials.verify().await?;
        }
        self.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn loader(pairs: &[(&str, &str)]) -> EnvConfigLoader {
        EnvConfigLoader::new(EnvSource::from_pairs(pairs.iter().copied()))
    }

    struct StubCredentials {
        available: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BackendCredentials for StubCredentials {
        async fn verify(&self) -> Result<(), ConfigError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.available {
                Ok(())
            } else {
                Err(ConfigError::CredentialsUnavailable("no providers in chain".to_string()))
            }
        }
    }

    #[test]
    fn single_phone_number() {
        let config = loader(&[("RECIPIENT_PHONE_NUMBERS", "+1234567890")])
            .build()
            .unwrap();
        assert_eq!(config.recipients(), ["+1234567890"]);
    }

    #[test]
    fn empty_entries_are_skipped() {
        let config = loader(&[("RECIPIENT_PHONE_NUMBERS", "+1234567890,,+1987654321")])
            .build()
            .unwrap();
        assert_eq!(config.recipients(), ["+1234567890", "+1987654321"]);
    }

    #[test]
    fn missing_recipients_fail() {
        let err = loader(&[]).build().unwrap_err();
        assert_eq!(err, ConfigError::RecipientsRequired);
    }

    #[test]
    fn blank_recipients_fail() {
        let err = loader(&[("RECIPIENT_PHONE_NUMBERS", " , ,")]).build().unwrap_err();
        assert_eq!(err.to_string(), "recipients required");
    }

    #[test]
    fn providers_default_to_mock() {
        let config = loader(&[("RECIPIENT_PHONE_NUMBERS", "+1234567890")])
            .build()
            .unwrap();
        assert_eq!(config.quote_provider, QuoteProviderSettings::Mock);
        assert_eq!(config.notifier, NotifierSettings::Mock);
    }

    #[test]
    fn unrecognized_providers_resolve_to_mock() {
        let config = loader(&[
            ("RECIPIENT_PHONE_NUMBERS", "+1234567890"),
            ("AI_PROVIDER", "gemini"),
            ("NOTIFICATION_PROVIDER", "twilio"),
        ])
        .build()
        .unwrap();
        assert_eq!(config.quote_provider.kind(), QuoteProviderKind::Mock);
        assert_eq!(config.notifier.kind(), NotifierKind::Mock);
    }

    #[test]
    fn openai_requires_api_key() {
        let err = loader(&[
            ("RECIPIENT_PHONE_NUMBERS", "+1234567890"),
            ("AI_PROVIDER", "OpenAI"),
        ])
        .build()
        .unwrap_err();
        assert_eq!(err, ConfigError::ApiKeyRequired);
        assert_eq!(err.to_string(), "api key required");
    }

    #[test]
    fn openai_defaults_model() {
        let config = loader(&[
            ("RECIPIENT_PHONE_NUMBERS", "+1234567890"),
            ("AI_PROVIDER", "openai"),
            ("OPENAI_API_KEY", "sk-test"),
        ])
        .build()
        .unwrap();

        let QuoteProviderSettings::OpenAi(settings) = config.quote_provider else {
            panic!("expected OpenAI settings");
        };
        assert_eq!(settings.model, Model::Gpt4oMini);
        assert_eq!(settings.api_key.expose(), "sk-test");
        assert_eq!(settings.base_url, "https://api.openai.com");
    }

    #[test]
    fn openai_model_and_base_url_overrides() {
        let config = loader(&[
            ("RECIPIENT_PHONE_NUMBERS", "+1234567890"),
            ("AI_PROVIDER", "openai"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_BASE_URL", "http://localhost:8080"),
        ])
        .build()
        .unwrap();

        let QuoteProviderSettings::OpenAi(settings) = config.quote_provider else {
            panic!("expected OpenAI settings");
        };
        assert_eq!(settings.model, Model::Gpt4o);
        assert_eq!(settings.base_url, "http://localhost:8080");
    }

    #[test]
    fn sns_requires_topic_arn() {
        let err = loader(&[
            ("RECIPIENT_PHONE_NUMBERS", "+1234567890"),
            ("NOTIFICATION_PROVIDER", "sns"),
        ])
        .build()
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingSetting("sns topic arn"));
    }

    #[test]
    fn sns_settings_are_resolved() {
        let config = loader(&[
            ("RECIPIENT_PHONE_NUMBERS", "+1234567890"),
            ("NOTIFICATION_PROVIDER", "SNS"),
            ("SNS_TOPIC_ARN", "arn:aws:sns:us-east-2:123456789012:quotes"),
        ])
        .build()
        .unwrap();

        let NotifierSettings::Sns(settings) = config.notifier else {
            panic!("expected SNS settings");
        };
        assert_eq!(settings.topic_arn, "arn:aws:sns:us-east-2:123456789012:quotes");
        assert_eq!(settings.region, "us-east-2");
    }

    #[tokio::test]
    async fn credential_check_runs_even_with_mock_providers() {
        let credentials = Arc::new(StubCredentials {
            available: false,
            calls: AtomicUsize::new(0),
        });
        let loader = loader(&[("RECIPIENT_PHONE_NUMBERS", "+1234567890")])
            .with_credential_check(credentials.clone());

        let err = loader.load().await.unwrap_err();
        assert!(err.to_string().starts_with("backend credentials unavailable"));
        assert_eq!(credentials.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn load_succeeds_when_credentials_resolve() {
        let credentials = Arc::new(StubCredentials {
            available: true,
            calls: AtomicUsize::new(0),
        });
        let loader = loader(&[("RECIPIENT_PHONE_NUMBERS", "+1234567890, +1987654321")])
            .with_credential_check(credentials);

        let config = loader.load().await.unwrap();
        assert_eq!(config.recipients().len(), 2);
    }

    #[tokio::test]
    async fn load_without_credential_check() {
        let config = loader(&[("RECIPIENT_PHONE_NUMBERS", "+1234567890")])
            .load()
            .await
            .unwrap();
        assert_eq!(config.recipients(), ["+1234567890"]);
    }
}
