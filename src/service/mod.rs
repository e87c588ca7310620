//! Service integrations for external APIs and clients.
//!
//! This module contains the services used by the triage gateway:
//! - LLM services (e.g., Gemini, OpenAI)
//! - The triage adapter built on top of them
//!
//! The LLM module defines both a generic trait and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod llm;
pub mod triage;
