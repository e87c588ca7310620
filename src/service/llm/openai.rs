//! Thin wrapper around async-openai for OpenAI LLM calls.

use std::{sync::Arc, time::Duration};

use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
};
use async_trait::async_trait;
use backoff::ExponentialBackoff;
use tracing::{debug, instrument};

use crate::base::{config::Config, types::Res};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the openai implementation.

impl LlmClient {
    pub fn openai(config: &Config) -> Self {
        let client = OpenAiLlmClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// OpenAI LLM client implementation.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiLlmClient {
    /// Create a new OpenAI LLM client.
    #[instrument(name = "OpenAiLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        let cfg = OpenAIConfig::new().with_api_base(config.openai_api_base.clone()).with_api_key(config.openai_api_key.clone());

        Self::with_openai_config(cfg, &config.openai_model)
    }

    /// Create a client from a prepared `OpenAIConfig`.
    ///
    /// async-openai retries 429 and 5xx responses by default; the backoff here allows
    /// no elapsed time, so every `generate` makes exactly one request.
    pub fn with_openai_config(cfg: OpenAIConfig, model: &str) -> Self {
        let single_attempt = ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        Self {
            client: Client::with_config(cfg).with_backoff(single_attempt),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl GenericLlmClient for OpenAiLlmClient {
    #[instrument(name = "OpenAiLlmClient::generate", skip_all, fields(model = %self.model))]
    async fn generate(&self, prompt: &str, temperature: f32) -> Res<String> {
        debug!(prompt_len = prompt.len(), "Sending request to OpenAI API");

        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default().content(prompt).build()?.into();

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message])
            .temperature(temperature)
            .build()?;

        let response = self.client.chat().create(request).await?;
        let content = response.choices.first().and_then(|choice| choice.message.content.clone()).unwrap_or_default();

        if content.is_empty() {
            return Err(anyhow::anyhow!("OpenAI response contained no text."));
        }

        Ok(content)
    }
}

// Tests.
