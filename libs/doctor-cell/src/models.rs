use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Specialty {
    pub id: String,
    pub display_name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub review_count: u32,
    /// Fixed attribute, not derived from any schedule.
    pub available: bool,
}

impl Doctor {
    /// Avatar initials, e.g. "MR" for "Dr. Michael Ross".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|part| !part.ends_with('.'))
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Morning,
    Afternoon,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub shift: Shift,
}

/// One selectable day in the booking date strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateOption {
    pub weekday: String,
    pub day_of_month: String,
    pub label: String,
}

/// Doctor entry as listed to patients, with its selectability resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorListing {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub initials: String,
    pub selectable: bool,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(String),

    #[error("Doctor {0} is not available for booking")]
    NotAvailable(String),

    #[error("Specialty not found: {0}")]
    SpecialtyNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_title() {
        let doctor = Doctor {
            id: "2".to_string(),
            name: "Dr. Michael Ross".to_string(),
            specialty: "Cardiologist".to_string(),
            rating: 4.8,
            review_count: 95,
            available: true,
        };
        assert_eq!(doctor.initials(), "MR");
    }
}
