//! Library root for `kairos-triage`.
//!
//! Kairos-triage is a thin HTTP gateway in front of a hosted LLM that:
//! - Accepts a free-text description of symptoms
//! - Asks the model for a triage-level suggestion (never a diagnosis)
//! - Returns a fixed-shape record with urgency and recommended level of care
//! - Falls back to a safe default whenever the model reply is unusable
//!
//! The architecture is built around a `GenericLlmClient` trait so the hosted
//! model (Gemini by default, OpenAI optionally) can be swapped or mocked.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the HTTP server:
/// - Creates the runtime context with the LLM client and triage adapter
/// - Serves the HTTP routes until shutdown
pub async fn start(config: Config) -> Void {
    info!("Starting kairos-triage ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
