use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::handlers::{self, BookingCellState};

pub fn booking_routes(state: Arc<BookingCellState>) -> Router {
    Router::new()
        .route("/", post(handlers::start_booking))
        .route("/{booking_id}", get(handlers::get_booking).delete(handlers::abandon_booking))
        // Selections
        .route("/{booking_id}/specialty", put(handlers::select_specialty))
        .route("/{booking_id}/doctor", put(handlers::select_doctor))
        .route("/{booking_id}/schedule", put(handlers::select_schedule))
        .route("/{booking_id}/notes", put(handlers::set_notes))
        // Navigation
        .route("/{booking_id}/advance", post(handlers::advance))
        .route("/{booking_id}/retreat", post(handlers::retreat))
        // Confirmation
        .route("/{booking_id}/summary", get(handlers::get_summary))
        .route("/{booking_id}/submit", post(handlers::submit_booking))
        .with_state(state)
}
