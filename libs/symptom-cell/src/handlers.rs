use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{CategoryQuery, SymptomError, SymptomReport};
use crate::services::{SymptomAnalyzer, SymptomCatalog};

pub struct SymptomCellState {
    pub analyzer: SymptomAnalyzer,
    pub catalog: SymptomCatalog,
}

impl SymptomCellState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            analyzer: SymptomAnalyzer::from_config(config),
            catalog: SymptomCatalog::standard(),
        }
    }
}

impl From<SymptomError> for AppError {
    fn from(err: SymptomError) -> Self {
        match err {
            SymptomError::EmptySymptoms => AppError::ValidationError(err.to_string()),
            SymptomError::Superseded => AppError::Conflict(err.to_string()),
        }
    }
}

pub async fn list_categories(
    State(state): State<Arc<SymptomCellState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Value>, AppError> {
    let categories = state.catalog.search(query.q.as_deref().unwrap_or_default());

    Ok(Json(json!({
        "categories": categories,
        "total": categories.len()
    })))
}

#[axum::debug_handler]
pub async fn analyze_symptoms(
    State(state): State<Arc<SymptomCellState>>,
    Json(report): Json<SymptomReport>,
) -> Result<Json<Value>, AppError> {
    let severity = report.severity;
    let analysis = state.analyzer.analyze(report).await?;

    Ok(Json(json!({
        "analysis": analysis,
        "probability_label": analysis.probability_label(),
        "severity": severity
    })))
}
