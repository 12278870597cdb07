//! Decision handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use hcm_core::PolicyOutcome;

use crate::models::DecisionRequest;
use crate::{AppResult, AppState};

/// Validate the request, then route it through the policy selector
pub async fn decide(
    State(state): State<AppState>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> AppResult<Json<PolicyOutcome>> {
    let Json(req) = payload?;
    req.validate()?;
    req.ensure_finite()?;

    let event = req.event();
    let config = req.governance(&state.config.governance());
    let outcome = state.selector.select_flag(req.mode.as_deref(), &event, &config);

    tracing::info!(
        device_id = %event.device_id,
        requested_mode = req.mode.as_deref().unwrap_or("rule"),
        policy = %outcome.policy(),
        decision = %outcome.decision(),
        "Decision served"
    );

    Ok(Json(outcome))
}
