use std::time::Duration;

use tracing::{debug, info};

use shared_config::AppConfig;
use shared_utils::{LatestRequest, RequestError};

use crate::models::{SymptomAnalysis, SymptomError, SymptomReport};

const RECOMMENDATIONS: [&str; 5] = [
    "Rest for 2-3 days",
    "Drink plenty of fluids",
    "Take over-the-counter pain relievers if needed",
    "Monitor temperature",
    "Consult a doctor if symptoms worsen",
];

/// Simulated triage. Every accepted report resolves to the same assessment
/// after a fixed delay.
pub struct SymptomAnalyzer {
    delay: Duration,
    latest: LatestRequest,
}

impl SymptomAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: LatestRequest::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Duration::from_millis(config.symptom_analysis_delay_ms))
    }

    /// Analyze `report`. A newer call made before this one resolves wins; this
    /// one then returns [`SymptomError::Superseded`].
    pub async fn analyze(&self, report: SymptomReport) -> Result<SymptomAnalysis, SymptomError> {
        if report.symptoms.trim().is_empty() {
            return Err(SymptomError::EmptySymptoms);
        }

        debug!(
            "Analyzing symptoms (severity {}, duration {:?})",
            report.severity, report.duration
        );

        match self.latest.run(self.assess(report)).await {
            Ok(analysis) => {
                info!("Symptom analysis complete: {}", analysis.condition);
                Ok(analysis)
            }
            Err(RequestError::Superseded) => Err(SymptomError::Superseded),
            Err(RequestError::Failed(err)) => Err(err),
        }
    }

    async fn assess(&self, _report: SymptomReport) -> Result<SymptomAnalysis, SymptomError> {
        tokio::time::sleep(self.delay).await;

        Ok(SymptomAnalysis {
            condition: "Common Cold".to_string(),
            probability: 78,
            description: "Your symptoms are consistent with a viral upper respiratory infection. \
                          Rest and hydration are recommended."
                .to_string(),
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        })
    }
}
