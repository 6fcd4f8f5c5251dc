use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::{self, RecordsCellState};

pub fn records_routes(state: Arc<RecordsCellState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_records).post(handlers::upload_record))
        .route("/{record_id}", get(handlers::get_record))
        .with_state(state)
}
