//! OpenAI chat completions quote provider
//!
//! Sends one two-message conversation (persona system prompt + user
//! request) and returns the first choice's content.

use async_trait::async_trait;
use quote_sender_application::{ApiKey, ConfigError, GenerationError, OpenAiSettings, QuoteProvider};
use quote_sender_domain::{Model, PersonaPrompt, Quote, QuoteProviderKind};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiQuoteProvider {
    client: reqwest::Client,
    api_key: ApiKey,
    model: Model,
    endpoint: String,
}

impl OpenAiQuoteProvider {
    pub fn new(settings: &OpenAiSettings) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quote-sender/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            endpoint: format!(
                "{}/v1/chat/completions",
                settings.base_url.trim_end_matches('/')
            ),
        })
    }

    fn request_body(&self) -> ChatCompletionRequest<'_> {
        ChatCompletionRequest {
            model: self.model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: PersonaPrompt::system(),
                },
                ChatMessage {
                    role: "user",
                    content: PersonaPrompt::user(),
                },
            ],
            temperature: PersonaPrompt::TEMPERATURE,
            max_tokens: PersonaPrompt::MAX_TOKENS,
        }
    }

    async fn complete(&self) -> Result<ChatCompletionResponse, GenerationError> {
        debug!(model = %self.model, endpoint = %self.endpoint, "Calling chat completions API");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&self.request_body())
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| GenerationError::RequestFailed(format!("invalid response body: {}", e)))
    }
}

/// Extract the first choice's text
fn first_choice(response: ChatCompletionResponse) -> Result<Quote, GenerationError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(GenerationError::EmptyResponse)?;
    Ok(Quote::new(choice.message.content.unwrap_or_default()))
}

#[async_trait]
impl QuoteProvider for OpenAiQuoteProvider {
    fn kind(&self) -> QuoteProviderKind {
        QuoteProviderKind::OpenAi
    }

    async fn generate_quote(
        &self,
        cancellation: &CancellationToken,
    ) -> Result<Quote, GenerationError> {
        let response = tokio::select! {
            biased;
            _ = cancellation.cancelled() => return Err(GenerationError::Cancelled),
            response = self.complete() => response?,
        };
        first_choice(response)
    }
}
