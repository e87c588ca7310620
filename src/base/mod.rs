//! Core components, types, and utilities for the triage gateway.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The triage directive and prompt construction.
//! - Request, result, and error types.

pub mod config;
pub mod prompts;
pub mod types;
