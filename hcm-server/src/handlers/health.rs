//! Liveness handler
//!
//! The rule path is always servable, so liveness only depends on the process
//! being up. The learned flag tells operators whether `mode: "learned"` is
//! actually scored or falls back.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    learned_available: bool,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        learned_available: state.selector.status().learned_available,
    })
}
