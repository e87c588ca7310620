//! Liveness route.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::runtime::Runtime;

/// Liveness payload: `{"status": "<service> running"}`.
pub async fn handle_root(State(runtime): State<Runtime>) -> Json<Value> {
    Json(json!({ "status": format!("{} running", runtime.config.service_name) }))
}
