//! Policy status handler

use axum::{extract::State, Json};

use hcm_core::SelectorStatus;

use crate::AppState;

/// Report whether learned mode is live or falling back
pub async fn status(State(state): State<AppState>) -> Json<SelectorStatus> {
    Json(state.selector.status())
}
