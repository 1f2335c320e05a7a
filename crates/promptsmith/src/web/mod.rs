//! # Web form driver
//!
//! ## Endpoints
//!
//! - `GET /` - Prompt form
//! - `POST /` - Submit the form (urlencoded `prompt`), renders the result inline
//! - `POST /api/critique` - JSON `{prompt}` → `{ok, result}`
//! - `GET /api/health` - Liveness plus the configured model
//!
//! The form posts to its own origin, so no CORS headers are sent and
//! browsers refuse cross-origin calls that would spend the API key.

mod handlers;
mod page;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use promptsmith_critic::Critic;
use promptsmith_logging::Logger;

#[derive(Clone)]
pub struct AppState {
    pub critic: Arc<dyn Critic>,
    pub logger: Logger,
    pub model: String,
}

pub fn create_router(critic: Arc<dyn Critic>, logger: Logger, model: String) -> Router {
    let state = AppState {
        critic,
        logger,
        model,
    };

    Router::new()
        .route("/", get(handlers::index).post(handlers::submit_form))
        .route("/api/critique", post(handlers::critique_api))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}
