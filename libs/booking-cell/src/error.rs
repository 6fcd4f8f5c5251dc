use thiserror::Error;
use uuid::Uuid;

use crate::models::WizardStep;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Selection incomplete: {step} still needs input")]
    IncompleteSelection { step: WizardStep },

    #[error("Doctor {doctor_id} is not available for booking")]
    DoctorUnavailable { doctor_id: String },

    #[error("Slot {date_label} {time_label} with doctor {doctor_id} is already taken")]
    SlotTaken {
        doctor_id: String,
        date_label: String,
        time_label: String,
    },

    #[error("Booking can only be submitted from the confirmation step, currently at {step}")]
    NotAtConfirmation { step: WizardStep },

    #[error("Booking service unreachable: {0}")]
    Transport(String),

    #[error("Booking session not found: {0}")]
    SessionNotFound(Uuid),
}

impl BookingError {
    /// Step the wizard should return to so the patient can correct the problem.
    pub fn recovery_step(&self, current: WizardStep) -> WizardStep {
        match self {
            BookingError::IncompleteSelection { step } => *step,
            BookingError::DoctorUnavailable { .. } => WizardStep::Doctor,
            BookingError::SlotTaken { .. } => WizardStep::Schedule,
            BookingError::NotAtConfirmation { step } => *step,
            BookingError::Transport(_) => WizardStep::Confirmation,
            BookingError::SessionNotFound(_) => current,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, BookingError::Transport(_))
    }
}
