use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{self, SymptomCellState};

pub fn symptom_routes(state: Arc<SymptomCellState>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route("/analyze", post(handlers::analyze_symptoms))
        .with_state(state)
}
