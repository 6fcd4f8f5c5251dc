use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{NewRecord, RecordError};
use crate::services::RecordSource;

pub struct RecordsCellState {
    pub records: Arc<dyn RecordSource>,
}

impl RecordsCellState {
    pub fn new(records: Arc<dyn RecordSource>) -> Self {
        Self { records }
    }
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::NotFound(_) => AppError::NotFound(err.to_string()),
            RecordError::EmptyTitle => AppError::ValidationError(err.to_string()),
        }
    }
}

pub async fn list_records(
    State(state): State<Arc<RecordsCellState>>,
) -> Result<Json<Value>, AppError> {
    let records = state.records.list().await?;

    Ok(Json(json!({
        "records": records,
        "total": records.len()
    })))
}

pub async fn get_record(
    State(state): State<Arc<RecordsCellState>>,
    Path(record_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let record = state.records.get(&record_id).await?;

    Ok(Json(json!({
        "record": record,
        "type_label": record.kind.display_label()
    })))
}

#[axum::debug_handler]
pub async fn upload_record(
    State(state): State<Arc<RecordsCellState>>,
    Json(request): Json<NewRecord>,
) -> Result<Json<Value>, AppError> {
    let record = state.records.upload(request).await?;

    Ok(Json(json!({
        "record": record,
        "message": "Record uploaded"
    })))
}
