//! HCM Engine API Server
//!
//! Serves governance containment decisions for smart-home device events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HCM ENGINE API                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌───────────────────────┐ │
//! │  │  Router   │→ │  Validation  │→ │  Policy Selector      │ │
//! │  │  (Axum)   │  │  (validator) │  │  rule | learned       │ │
//! │  └───────────┘  └──────────────┘  └──────────┬────────────┘ │
//! │                                   ┌──────────┴──────────┐   │
//! │                                   ▼                     ▼   │
//! │                          ┌────────────────┐  ┌────────────┐ │
//! │                          │ Rule decision  │  │ Learned    │ │
//! │                          │ (impact rule)  │  │ model      │ │
//! │                          └────────────────┘  └────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod telemetry;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use hcm_core::{LearnedModel, PolicySelector};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<PolicySelector>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config, learned: LearnedModel) -> Self {
        Self {
            selector: Arc::new(PolicySelector::new(learned)),
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/decide", post(handlers::decide::decide))
        .route("/api/v1/decide", post(handlers::decide::decide))
        .route("/api/v1/policy/status", get(handlers::policy::status));

    Router::new()
        .merge(public_routes)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
