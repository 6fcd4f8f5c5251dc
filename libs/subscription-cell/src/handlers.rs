use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{PurchaseRequest, SubscriptionError};
use crate::services::PurchasesProvider;

pub struct SubscriptionCellState {
    pub provider: Arc<dyn PurchasesProvider>,
}

impl SubscriptionCellState {
    pub fn new(provider: Arc<dyn PurchasesProvider>) -> Self {
        Self { provider }
    }
}

impl From<SubscriptionError> for AppError {
    fn from(err: SubscriptionError) -> Self {
        match err {
            SubscriptionError::UnknownPackage(_) => AppError::NotFound(err.to_string()),
            SubscriptionError::ExpirationOutOfRange(_) => AppError::Internal(err.to_string()),
        }
    }
}

pub async fn get_status(
    State(state): State<Arc<SubscriptionCellState>>,
) -> Result<Json<Value>, AppError> {
    let status = state.provider.status().await;
    Ok(Json(json!({ "status": status })))
}

pub async fn get_offerings(
    State(state): State<Arc<SubscriptionCellState>>,
) -> Result<Json<Value>, AppError> {
    let packages = state.provider.offerings().await;

    Ok(Json(json!({
        "packages": packages,
        "total": packages.len()
    })))
}

#[axum::debug_handler]
pub async fn purchase(
    State(state): State<Arc<SubscriptionCellState>>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<Value>, AppError> {
    let status = state.provider.purchase(&request.package_id).await?;

    Ok(Json(json!({
        "status": status,
        "message": "Purchase complete"
    })))
}

pub async fn restore(
    State(state): State<Arc<SubscriptionCellState>>,
) -> Result<Json<Value>, AppError> {
    let status = state.provider.restore().await;
    Ok(Json(json!({ "status": status })))
}
