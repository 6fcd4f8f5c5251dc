use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{self, SubscriptionCellState};

pub fn subscription_routes(state: Arc<SubscriptionCellState>) -> Router {
    Router::new()
        .route("/status", get(handlers::get_status))
        .route("/offerings", get(handlers::get_offerings))
        .route("/purchase", post(handlers::purchase))
        .route("/restore", post(handlers::restore))
        .with_state(state)
}
