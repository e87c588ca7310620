//! Runtime services and shared state for the triage gateway.

use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction,
    service::{llm::LlmClient, triage::TriageClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration and the triage adapter (which owns the LLM client).
/// It is designed to be trivially cloneable, allowing it to be passed around
/// (and used as router state) without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The triage adapter instance.
    pub triage: TriageClient,
}

impl Runtime {
    /// Create a new runtime instance using the configured LLM provider.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        let llm = LlmClient::from_config(&config)?;

        info!("Using LLM provider {:?}", config.llm_provider);

        Ok(Self::with_llm(config, llm))
    }

    /// Create a new runtime instance around an existing LLM client.
    pub fn with_llm(config: Config, llm: LlmClient) -> Self {
        let triage = TriageClient::new(&config, llm);

        Self { config, triage }
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn start(&self) -> Void {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(address.as_str()).await?;

        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, interaction::router(self.clone()))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped.");

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
}
