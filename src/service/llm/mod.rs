//! Integration with hosted Large Language Model services.
//!
//! This module provides a thin seam around LLM providers (Gemini, OpenAI)
//! for turning one prompt into one text reply.
//!
//! The module defines the `GenericLlmClient` trait that can be implemented
//! for different LLM providers; the provider is picked once from configuration.

pub mod gemini;
pub mod openai;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::{
    config::{Config, LlmProvider},
    types::Res,
};

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// Implementing this trait allows different LLM providers to back the triage adapter.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Send a single-turn, user-role prompt and return the raw text reply.
    async fn generate(&self, prompt: &str, temperature: f32) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }

    /// Create the client for the configured provider.
    pub fn from_config(config: &Config) -> Res<Self> {
        match config.llm_provider {
            LlmProvider::Gemini => Self::gemini(config),
            LlmProvider::OpenAi => Ok(Self::openai(config)),
        }
    }
}
