use crate::interface_adapters::handlers::simulate::{health, simulate};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

// Build the HTTP router for the simulation API.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/simulate", post(simulate))
        .with_state(state)
}
