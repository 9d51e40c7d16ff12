//! Backend credential validation

use super::env_source::EnvSource;
use super::loader::keys;
use crate::aws::load_sdk_config;
use async_trait::async_trait;
use aws_credential_types::provider::ProvideCredentials;
use quote_sender_application::{ConfigError, SnsSettings};
use tracing::debug;

/// Checks that backend credentials can be resolved before a run starts
#[async_trait]
pub trait BackendCredentials: Send + Sync {
    async fn verify(&self) -> Result<(), ConfigError>;
}

/// Resolves credentials through the AWS default credential chain.
pub struct AwsCredentialChain {
    region: String,
    profile: Option<String>,
}

impl AwsCredentialChain {
    pub fn new(region: impl Into<String>, profile: Option<String>) -> Self {
        Self {
            region: region.into(),
            profile,
        }
    }

    /// Region and profile from `AWS_REGION` / `AWS_PROFILE`
    pub fn from_env(env: &EnvSource) -> Self {
        Self::new(
            env.get_or(keys::AWS_REGION, SnsSettings::DEFAULT_REGION),
            env.get(keys::AWS_PROFILE).map(String::from),
        )
    }
}

#[async_trait]
impl BackendCredentials for AwsCredentialChain {
    async fn verify(&self) -> Result<(), ConfigError> {
        let config = load_sdk_config(&self.region, self.profile.as_deref()).await;
        let provider = config.credentials_provider().ok_or_else(|| {
            ConfigError::CredentialsUnavailable("no credential provider configured".to_string())
        })?;

        provider
            .provide_credentials()
            .await
            .map_err(|e| ConfigError::CredentialsUnavailable(e.to_string()))?;

        debug!(region = %self.region, "AWS credentials resolved");
        Ok(())
    }
}
