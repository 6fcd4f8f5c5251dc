use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::handlers::{self, DoctorCellState};

pub fn doctor_routes(state: Arc<DoctorCellState>) -> Router {
    Router::new()
        .route("/specialties", get(handlers::list_specialties))
        .route("/doctors", get(handlers::list_doctors))
        .route("/doctors/{doctor_id}", get(handlers::get_doctor))
        .route("/time-slots", get(handlers::list_time_slots))
        .route("/dates", get(handlers::list_dates))
        .with_state(state)
}
