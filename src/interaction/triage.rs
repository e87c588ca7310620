//! Triage route: hands the symptoms to the triage adapter and returns its result.

use axum::{Json, extract::State};
use tracing::{info, instrument};

use crate::{
    base::types::{TriageRequest, TriageResult},
    runtime::Runtime,
};

/// Handle `POST /triage`.
///
/// Only `symptoms` reaches the adapter; `age` and `location` are accepted and ignored.
/// The adapter never fails, so this always answers with a full result.
#[instrument(skip_all)]
pub async fn handle_triage(State(runtime): State<Runtime>, Json(request): Json<TriageRequest>) -> Json<TriageResult> {
    let outcome = runtime.triage.triage(&request.symptoms).await;

    info!(outcome = outcome.kind(), symptoms_len = request.symptoms.len(), "Triage request handled");

    Json(outcome.into_result())
}
