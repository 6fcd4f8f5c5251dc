use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::error::BookingError;
use crate::models::VisitType;
use crate::services::{BookingSessionStore, BookingWizard, StepController};

pub struct BookingCellState {
    pub controller: StepController,
    pub sessions: BookingSessionStore,
}

impl BookingCellState {
    pub fn new(config: &AppConfig, controller: StepController) -> Self {
        Self {
            controller,
            sessions: BookingSessionStore::with_ttl(Duration::from_secs(config.booking_session_ttl_secs)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SpecialtyRequest {
    pub specialty_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DoctorRequest {
    pub doctor_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleRequest {
    pub date_label: Option<String>,
    pub time_label: Option<String>,
    pub visit_type: Option<VisitType>,
}

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub notes: String,
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::IncompleteSelection { .. } | BookingError::NotAtConfirmation { .. } => {
                AppError::ValidationError(err.to_string())
            }
            BookingError::DoctorUnavailable { .. } | BookingError::SlotTaken { .. } => {
                AppError::Conflict(err.to_string())
            }
            BookingError::Transport(_) => AppError::ExternalService(err.to_string()),
            BookingError::SessionNotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

fn wizard_view(state: &BookingCellState, booking_id: Uuid, wizard: &BookingWizard) -> Value {
    json!({
        "booking_id": booking_id,
        "step": wizard.step(),
        "step_title": wizard.step().title(),
        "selection": wizard.selection(),
        "can_advance": state.controller.can_advance(wizard),
    })
}

// ==============================================================================
// FLOW LIFECYCLE
// ==============================================================================

pub async fn start_booking(
    State(state): State<Arc<BookingCellState>>,
) -> Result<Json<Value>, AppError> {
    let wizard = state.controller.start();
    let booking_id = state.sessions.open(wizard.clone()).await;

    Ok(Json(wizard_view(&state, booking_id, &wizard)))
}

pub async fn get_booking(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let wizard = state.sessions.get(booking_id).await?;
    Ok(Json(wizard_view(&state, booking_id, &wizard)))
}

pub async fn abandon_booking(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    state.sessions.close(booking_id).await?;
    info!("Booking flow {} abandoned", booking_id);

    Ok(Json(json!({
        "booking_id": booking_id,
        "abandoned": true
    })))
}

// ==============================================================================
// SELECTIONS
// ==============================================================================

pub async fn select_specialty(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<SpecialtyRequest>,
) -> Result<Json<Value>, AppError> {
    let wizard = state
        .sessions
        .update(booking_id, |w| state.controller.select_specialty(w, &request.specialty_id))
        .await?;

    Ok(Json(wizard_view(&state, booking_id, &wizard)))
}

pub async fn select_doctor(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<DoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let wizard = state
        .sessions
        .update(booking_id, |w| state.controller.select_doctor(w, &request.doctor_id))
        .await?;

    Ok(Json(wizard_view(&state, booking_id, &wizard)))
}

pub async fn select_schedule(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = &state.controller;
    let wizard = state
        .sessions
        .update(booking_id, |mut w| {
            if let Some(visit_type) = request.visit_type {
                w = controller.select_visit_type(w, visit_type);
            }
            if let Some(date_label) = request.date_label.as_deref() {
                w = controller.select_date(w, date_label);
            }
            if let Some(time_label) = request.time_label.as_deref() {
                w = controller.select_time(w, time_label);
            }
            w
        })
        .await?;

    Ok(Json(wizard_view(&state, booking_id, &wizard)))
}

pub async fn set_notes(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<NotesRequest>,
) -> Result<Json<Value>, AppError> {
    let wizard = state
        .sessions
        .update(booking_id, |w| state.controller.set_notes(w, &request.notes))
        .await?;

    Ok(Json(wizard_view(&state, booking_id, &wizard)))
}

// ==============================================================================
// NAVIGATION
// ==============================================================================

pub async fn advance(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let mut before = None;
    let wizard = state
        .sessions
        .update(booking_id, |w| {
            before = Some(w.step());
            state.controller.advance(w)
        })
        .await?;

    let mut view = wizard_view(&state, booking_id, &wizard);
    view["advanced"] = json!(before.is_some_and(|step| step != wizard.step()));
    Ok(Json(view))
}

pub async fn retreat(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let wizard = state
        .sessions
        .update(booking_id, |w| state.controller.retreat(w))
        .await?;

    Ok(Json(wizard_view(&state, booking_id, &wizard)))
}

// ==============================================================================
// CONFIRMATION
// ==============================================================================

pub async fn get_summary(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let wizard = state.sessions.get(booking_id).await?;
    let summary = state.controller.summary(&wizard);

    Ok(Json(json!({
        "booking_id": booking_id,
        "step": wizard.step(),
        "summary": summary
    })))
}

pub async fn submit_booking(
    State(state): State<Arc<BookingCellState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    // Taken out of the store so a second submit cannot race this one
    let wizard = state.sessions.take(booking_id).await?;

    match state.controller.submit(wizard).await {
        Ok(appointment) => Ok(Json(json!({
            "booking_id": booking_id,
            "appointment": appointment
        }))),
        Err(rejection) => {
            // The flow stays open at the step that needs correcting
            info!("Booking flow {} resumes at {}", booking_id, rejection.wizard.step());
            state.sessions.restore(booking_id, rejection.wizard).await;
            Err(rejection.error.into())
        }
    }
}
