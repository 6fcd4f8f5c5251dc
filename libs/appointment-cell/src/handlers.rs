// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use shared_models::error::AppError;

use crate::models::{AppointmentError, AppointmentFilter, NewAppointment, RescheduleRequest};
use crate::services::AppointmentSource;

pub struct AppointmentCellState {
    pub appointments: Arc<dyn AppointmentSource>,
}

impl AppointmentCellState {
    pub fn new(appointments: Arc<dyn AppointmentSource>) -> Self {
        Self { appointments }
    }
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::SlotTaken { .. } | AppointmentError::InvalidStatus(_) => {
                AppError::Conflict(err.to_string())
            }
            AppointmentError::Validation(_) => AppError::ValidationError(err.to_string()),
        }
    }
}

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

pub async fn list_appointments(
    State(state): State<Arc<AppointmentCellState>>,
    Query(filter): Query<AppointmentFilter>,
) -> Result<Json<Value>, AppError> {
    let appointments = state.appointments.list(filter).await?;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

pub async fn get_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.appointments.get(&appointment_id).await?;

    Ok(Json(json!({
        "appointment": appointment,
        "status_label": appointment.status.display_label()
    })))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Json(request): Json<NewAppointment>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.appointments.create(request).await?;
    info!("Appointment {} created via API", appointment.id);

    Ok(Json(json!({
        "appointment": appointment,
        "message": "Appointment booked"
    })))
}

#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(state): State<Arc<AppointmentCellState>>,
    Path(appointment_id): Path<String>,
    Json(request): Json<RescheduleRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.appointments.reschedule(&appointment_id, request).await?;

    Ok(Json(json!({
        "appointment": appointment,
        "message": "Appointment rescheduled"
    })))
}
