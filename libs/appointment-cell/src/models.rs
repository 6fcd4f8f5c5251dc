// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use shared_models::VisitType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub doctor: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub visit_type: VisitType,
    pub notes: Option<String>,
}

impl Appointment {
    /// Whether this appointment holds `doctor_id`'s slot at `date` `time`.
    pub fn occupies(&self, doctor_id: &str, date: &str, time: &str) -> bool {
        self.status.holds_slot() && self.doctor_id == doctor_id && self.date == date && self.time == time
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Only upcoming appointments block their slot.
    pub fn holds_slot(&self) -> bool {
        matches!(self, AppointmentStatus::Upcoming)
    }

    pub fn can_reschedule(&self) -> bool {
        matches!(self, AppointmentStatus::Upcoming)
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Upcoming => write!(f, "upcoming"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub doctor_id: String,
    pub doctor: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type", default)]
    pub visit_type: VisitType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleRequest {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(String),

    #[error("Slot {date} {time} with doctor {doctor_id} is already booked")]
    SlotTaken {
        doctor_id: String,
        date: String,
        time: String,
    },

    #[error("Appointment cannot be modified in current status: {0}")]
    InvalidStatus(AppointmentStatus),

    #[error("Invalid appointment: {0}")]
    Validation(String),
}
