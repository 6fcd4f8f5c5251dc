use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Mild => write!(f, "mild"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Severe => write!(f, "severe"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomCategory {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryQuery {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomReport {
    pub symptoms: String,
    pub duration: Option<String>,
    #[serde(default)]
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomAnalysis {
    pub condition: String,
    /// Percentage, 0-100.
    pub probability: u8,
    pub description: String,
    pub recommendations: Vec<String>,
}

impl SymptomAnalysis {
    pub fn probability_label(&self) -> String {
        format!("{}%", self.probability)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymptomError {
    #[error("Please describe your symptoms")]
    EmptySymptoms,

    #[error("Analysis was replaced by a newer request")]
    Superseded,
}
