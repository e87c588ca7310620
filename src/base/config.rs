//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc, time::Duration};

use serde::Deserialize;

use crate::base::prompts;

use super::types::{Res, Void};

/// Default LLM provider.
fn default_llm_provider() -> LlmProvider {
    LlmProvider::Gemini
}

/// Default Gemini model to use.
fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Default Gemini API base URL.
fn default_gemini_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Default OpenAI API base URL.
fn default_openai_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

/// Default OpenAI model to use.
fn default_openai_model() -> String {
    "gpt-4.1-mini".to_string()
}

/// Default sampling temperature for triage requests.
fn default_triage_temperature() -> f32 {
    0.2
}

/// Default system directive for triage requests.
fn default_triage_system_directive() -> String {
    prompts::TRIAGE_SYSTEM_DIRECTIVE.to_string()
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8000
}

/// Default service name reported by the liveness route.
fn default_service_name() -> String {
    "Kairos backend".to_string()
}

/// Which hosted model backs the triage adapter.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    OpenAi,
}

/// Configuration for the triage gateway.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// LLM provider, `gemini` or `openai` (`LLM_PROVIDER`).
    #[serde(default = "default_llm_provider")]
    pub llm_provider: LlmProvider,
    /// Gemini API key (`GEMINI_API_KEY`).
    #[serde(default)]
    pub gemini_api_key: String,
    /// Gemini model to use (`GEMINI_MODEL`).
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// Gemini API base URL (`GEMINI_API_BASE`).
    #[serde(default = "default_gemini_api_base")]
    pub gemini_api_base: String,
    /// OpenAI API key (`OPENAI_API_KEY`).
    #[serde(default)]
    pub openai_api_key: String,
    /// OpenAI API base URL (`OPENAI_API_BASE`).
    #[serde(default = "default_openai_api_base")]
    pub openai_api_base: String,
    /// OpenAI model to use (`OPENAI_MODEL`).
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Sampling temperature for triage requests (`TRIAGE_TEMPERATURE`).
    /// Value between 0 and 2.  Low values keep the model literal.
    #[serde(default = "default_triage_temperature")]
    pub triage_temperature: f32,
    /// Optional custom system directive to override the default (`TRIAGE_SYSTEM_DIRECTIVE`).
    #[serde(default = "default_triage_system_directive")]
    pub triage_system_directive: String,
    /// Optional timeout for the model call, in seconds (`LLM_TIMEOUT_SECS`).
    /// When unset, the call waits as long as the provider's client does.
    #[serde(default)]
    pub llm_timeout_secs: Option<u64>,
    /// Address to bind the HTTP server to (`SERVER_HOST`).
    #[serde(default = "default_server_host")]
    pub server_host: String,
    /// Port to bind the HTTP server to (`SERVER_PORT`).
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    /// Name reported by `GET /` (`SERVICE_NAME`).
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            llm_provider: default_llm_provider(),
            gemini_api_key: String::new(),
            gemini_model: default_gemini_model(),
            gemini_api_base: default_gemini_api_base(),
            openai_api_key: String::new(),
            openai_api_base: default_openai_api_base(),
            openai_model: default_openai_model(),
            triage_temperature: default_triage_temperature(),
            triage_system_directive: default_triage_system_directive(),
            llm_timeout_secs: None,
            server_host: default_server_host(),
            server_port: default_server_port(),
            service_name: default_service_name(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default());

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Check the values that serde cannot.
    pub fn validate(&self) -> Void {
        if self.triage_temperature < 0.0 || self.triage_temperature > 2.0 {
            return Err(anyhow::anyhow!("Triage temperature must be between 0 and 2."));
        }

        match self.llm_provider {
            LlmProvider::Gemini if self.gemini_api_key.is_empty() => {
                return Err(anyhow::anyhow!("`GEMINI_API_KEY` must be set when the LLM provider is `gemini`."));
            }
            LlmProvider::OpenAi if self.openai_api_key.is_empty() => {
                return Err(anyhow::anyhow!("`OPENAI_API_KEY` must be set when the LLM provider is `openai`."));
            }
            _ => {}
        }

        if self.llm_timeout_secs == Some(0) {
            return Err(anyhow::anyhow!("LLM timeout must be at least one second when set."));
        }

        Ok(())
    }

    /// The model call timeout, if one is configured.
    pub fn llm_timeout(&self) -> Option<Duration> {
        self.llm_timeout_secs.map(Duration::from_secs)
    }

    /// The `host:port` pair the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
