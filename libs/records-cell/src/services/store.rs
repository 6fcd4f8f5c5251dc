use async_trait::async_trait;
use chrono::Local;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{MedicalRecord, NewRecord, RecordError, RecordKind};

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn list(&self) -> Result<Vec<MedicalRecord>, RecordError>;

    async fn get(&self, record_id: &str) -> Result<MedicalRecord, RecordError>;

    async fn upload(&self, record: NewRecord) -> Result<MedicalRecord, RecordError>;
}

/// Patient records held in process memory, newest upload last.
pub struct InMemoryRecordStore {
    records: RwLock<Vec<MedicalRecord>>,
}

impl InMemoryRecordStore {
    pub fn new(records: Vec<MedicalRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn seeded() -> Self {
        let records = [
            (
                "1",
                "Blood Test Results",
                "Feb 10, 2026",
                RecordKind::Lab,
                "Dr. Sarah Chen",
                "All values within normal range. Cholesterol slightly elevated.",
            ),
            (
                "2",
                "Prescription - Lisinopril",
                "Feb 12, 2026",
                RecordKind::Prescription,
                "Dr. Michael Ross",
                "10mg daily for blood pressure management.",
            ),
            (
                "3",
                "Chest X-Ray",
                "Jan 28, 2026",
                RecordKind::Imaging,
                "Dr. Michael Ross",
                "No abnormalities detected. Clear lungs.",
            ),
        ]
        .into_iter()
        .map(|(id, title, date, kind, doctor, summary)| MedicalRecord {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            kind,
            doctor: doctor.to_string(),
            summary: summary.to_string(),
        })
        .collect();

        Self::new(records)
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordStore {
    async fn list(&self) -> Result<Vec<MedicalRecord>, RecordError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, record_id: &str) -> Result<MedicalRecord, RecordError> {
        debug!("Fetching record {}", record_id);

        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == record_id)
            .cloned()
            .ok_or_else(|| RecordError::NotFound(record_id.to_string()))
    }

    async fn upload(&self, record: NewRecord) -> Result<MedicalRecord, RecordError> {
        let title = record.title.trim();
        if title.is_empty() {
            return Err(RecordError::EmptyTitle);
        }

        let date = if record.date.trim().is_empty() {
            Local::now().format("%b %-d, %Y").to_string()
        } else {
            record.date
        };

        let stored = MedicalRecord {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date,
            kind: record.kind,
            doctor: record.doctor,
            summary: record.summary,
        };

        self.records.write().await.push(stored.clone());
        info!("Record {} uploaded ({})", stored.id, stored.kind.display_label());

        Ok(stored)
    }
}
