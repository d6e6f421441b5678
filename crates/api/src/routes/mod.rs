//! HTTP routes

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod webhooks;


pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/webhooks", post(webhooks::stripe_webhook))
        .with_state(state)
}
