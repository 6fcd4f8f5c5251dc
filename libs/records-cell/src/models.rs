use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub doctor: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Lab,
    Prescription,
    Imaging,
    Note,
}

impl RecordKind {
    pub fn display_label(&self) -> &'static str {
        match self {
            RecordKind::Lab => "Lab Result",
            RecordKind::Prescription => "Prescription",
            RecordKind::Imaging => "Imaging",
            RecordKind::Note => "Clinical Note",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub title: String,
    /// Blank or missing means today.
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub doctor: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record title must not be empty")]
    EmptyTitle,
}
