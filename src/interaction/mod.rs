//! HTTP interactions for the triage gateway.
//!
//! This module wires the HTTP surface onto the runtime:
//! - `GET /` reports liveness.
//! - `POST /triage` turns a symptom description into a triage suggestion.

pub mod health;
pub mod triage;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::runtime::Runtime;

/// Build the application router over the shared runtime.
pub fn router(runtime: Runtime) -> Router {
    Router::new()
        .route("/", get(health::handle_root))
        .route("/triage", post(triage::handle_triage))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(runtime)
}
