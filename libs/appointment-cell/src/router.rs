// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::handlers::{self, AppointmentCellState};

pub fn appointment_routes(state: Arc<AppointmentCellState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::create_appointment))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/reschedule", patch(handlers::reschedule_appointment))
        .with_state(state)
}
