use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::DoctorError;
use crate::services::{upcoming_dates, AvailabilityFilter, DoctorDirectory};

pub struct DoctorCellState {
    pub config: Arc<AppConfig>,
    pub directory: Arc<DoctorDirectory>,
}

impl DoctorCellState {
    pub fn new(config: Arc<AppConfig>, directory: Arc<DoctorDirectory>) -> Self {
        Self { config, directory }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DoctorListQuery {
    pub specialty: Option<String>,
    pub available_only: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub from: Option<NaiveDate>,
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) | DoctorError::SpecialtyNotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::NotAvailable(_) => AppError::Conflict(err.to_string()),
        }
    }
}

pub async fn list_specialties(
    State(state): State<Arc<DoctorCellState>>,
) -> Result<Json<Value>, AppError> {
    let specialties = state.directory.specialties();

    Ok(Json(json!({
        "specialties": specialties,
        "total": specialties.len()
    })))
}

pub async fn list_doctors(
    State(state): State<Arc<DoctorCellState>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    // Specialty filter takes a display name, matching the doctor record
    let doctors: Vec<_> = AvailabilityFilter::listings(state.directory.doctors())
        .into_iter()
        .filter(|l| query.specialty.as_ref().map_or(true, |s| &l.doctor.specialty == s))
        .filter(|l| !query.available_only.unwrap_or(false) || l.selectable)
        .collect();

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

pub async fn get_doctor(
    State(state): State<Arc<DoctorCellState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = state
        .directory
        .doctor(&doctor_id)
        .ok_or_else(|| DoctorError::NotFound(doctor_id.clone()))?;

    Ok(Json(json!({
        "doctor": doctor,
        "selectable": AvailabilityFilter::is_selectable(doctor)
    })))
}

pub async fn list_time_slots(
    State(state): State<Arc<DoctorCellState>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "time_slots": state.directory.time_slots()
    })))
}

pub async fn list_dates(
    State(state): State<Arc<DoctorCellState>>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Value>, AppError> {
    let from = query.from.unwrap_or_else(|| Local::now().date_naive());
    let dates = upcoming_dates(from, state.config.booking_date_window_days);

    Ok(Json(json!({
        "dates": dates
    })))
}
