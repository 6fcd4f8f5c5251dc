use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use shared_models::VisitType;

/// Choices accumulated while moving through the booking wizard.
///
/// Fields are filled in step order. Nothing here enforces that; the wizard
/// only accepts a field while it is on the step that owns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingSelection {
    pub specialty_id: Option<String>,
    pub doctor_id: Option<String>,
    pub date_label: Option<String>,
    pub time_label: Option<String>,
    #[serde(default)]
    pub visit_type: VisitType,
    pub notes: Option<String>,
}

impl BookingSelection {
    /// Earliest step whose required fields are still empty.
    pub fn first_incomplete_step(&self) -> Option<WizardStep> {
        if self.specialty_id.is_none() {
            Some(WizardStep::Specialty)
        } else if self.doctor_id.is_none() {
            Some(WizardStep::Doctor)
        } else if self.date_label.is_none() || self.time_label.is_none() {
            Some(WizardStep::Schedule)
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.first_incomplete_step().is_none()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(into = "u8", try_from = "u8")]
pub enum WizardStep {
    Specialty = 1,
    Doctor = 2,
    Schedule = 3,
    Confirmation = 4,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Specialty;
    pub const LAST: WizardStep = WizardStep::Confirmation;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::Specialty),
            2 => Some(WizardStep::Doctor),
            3 => Some(WizardStep::Schedule),
            4 => Some(WizardStep::Confirmation),
            _ => None,
        }
    }

    /// Following step, clamped at the confirmation step.
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::LAST)
    }

    /// Preceding step, clamped at the first step.
    pub fn previous(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Self::FIRST)
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Specialty => "Select Specialty",
            WizardStep::Doctor => "Select Doctor",
            WizardStep::Schedule => "Select Date & Time",
            WizardStep::Confirmation => "Confirm Appointment",
        }
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or_else(|| format!("wizard step must be 1-4, got {}", value))
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.number())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmationField {
    pub label: String,
    pub value: String,
}

/// Review-step summary: always five fields, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmationSummary {
    pub fields: Vec<ConfirmationField>,
    pub visit_type_label: String,
    pub notes: Option<String>,
}

impl ConfirmationSummary {
    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// Finalized booking returned by the booking collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedAppointment {
    pub appointment_id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date_label: String,
    pub time_label: String,
    pub visit_type: VisitType,
    pub notes: Option<String>,
    pub confirmed_at: DateTime<Utc>,
}
