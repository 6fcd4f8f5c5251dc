// libs/booking-cell/src/services/controller.rs
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use doctor_cell::{AvailabilityFilter, DoctorDirectory};

use crate::error::BookingError;
use crate::models::{BookingSelection, ConfirmationSummary, ConfirmedAppointment, VisitType, WizardStep};
use crate::services::assembler::ConfirmationAssembler;
use crate::services::collaborator::BookingCollaborator;

/// State of one booking flow: the current step and everything chosen so far.
///
/// Only [`StepController`] moves a wizard between states. Each transition
/// consumes the value and hands back the next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingWizard {
    step: WizardStep,
    selection: BookingSelection,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::FIRST,
            selection: BookingSelection::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn into_selection(self) -> BookingSelection {
        self.selection
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

/// A submission the collaborator did not accept.
///
/// The wizard is handed back positioned at the step that needs correcting,
/// with every selection intact.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct SubmitRejection {
    pub wizard: BookingWizard,
    #[source]
    pub error: BookingError,
}

pub struct StepController {
    directory: Arc<DoctorDirectory>,
    collaborator: Arc<dyn BookingCollaborator>,
}

impl StepController {
    pub fn new(directory: Arc<DoctorDirectory>, collaborator: Arc<dyn BookingCollaborator>) -> Self {
        Self {
            directory,
            collaborator,
        }
    }

    pub fn directory(&self) -> &DoctorDirectory {
        &self.directory
    }

    pub fn start(&self) -> BookingWizard {
        debug!("Starting new booking wizard");
        BookingWizard::new()
    }

    // ==========================================================================
    // SELECTIONS
    // ==========================================================================

    pub fn select_specialty(&self, mut wizard: BookingWizard, specialty_id: &str) -> BookingWizard {
        if wizard.step != WizardStep::Specialty {
            return wizard;
        }
        if self.directory.specialty(specialty_id).is_none() {
            debug!("Ignoring unknown specialty: {}", specialty_id);
            return wizard;
        }

        wizard.selection.specialty_id = Some(specialty_id.to_string());
        wizard
    }

    /// Selecting an unavailable or unknown doctor leaves the selection unchanged.
    pub fn select_doctor(&self, mut wizard: BookingWizard, doctor_id: &str) -> BookingWizard {
        if wizard.step != WizardStep::Doctor {
            return wizard;
        }
        if let Err(e) = AvailabilityFilter::check_selectable(&self.directory, doctor_id) {
            debug!("Ignoring doctor selection: {}", e);
            return wizard;
        }

        wizard.selection.doctor_id = Some(doctor_id.to_string());
        wizard
    }

    pub fn select_date(&self, mut wizard: BookingWizard, date_label: &str) -> BookingWizard {
        let date_label = date_label.trim();
        if wizard.step != WizardStep::Schedule || date_label.is_empty() {
            return wizard;
        }

        wizard.selection.date_label = Some(date_label.to_string());
        wizard
    }

    pub fn select_time(&self, mut wizard: BookingWizard, time_label: &str) -> BookingWizard {
        if wizard.step != WizardStep::Schedule {
            return wizard;
        }
        if self.directory.time_slot(time_label).is_none() {
            debug!("Ignoring unknown time slot: {}", time_label);
            return wizard;
        }

        wizard.selection.time_label = Some(time_label.to_string());
        wizard
    }

    pub fn select_visit_type(&self, mut wizard: BookingWizard, visit_type: VisitType) -> BookingWizard {
        if wizard.step == WizardStep::Schedule {
            wizard.selection.visit_type = visit_type;
        }
        wizard
    }

    /// Free-text notes; blank input clears them.
    pub fn set_notes(&self, mut wizard: BookingWizard, notes: &str) -> BookingWizard {
        if wizard.step != WizardStep::Confirmation {
            return wizard;
        }

        let notes = notes.trim();
        wizard.selection.notes = (!notes.is_empty()).then(|| notes.to_string());
        wizard
    }

    // ==========================================================================
    // NAVIGATION
    // ==========================================================================

    /// Check the current step's precondition for moving forward.
    pub fn check_advance(&self, wizard: &BookingWizard) -> Result<(), BookingError> {
        let selection = &wizard.selection;

        match wizard.step {
            WizardStep::Specialty => require(selection.specialty_id.is_some(), WizardStep::Specialty),
            WizardStep::Doctor => {
                let doctor_id = selection
                    .doctor_id
                    .as_deref()
                    .ok_or(BookingError::IncompleteSelection { step: WizardStep::Doctor })?;

                AvailabilityFilter::check_selectable(&self.directory, doctor_id)
                    .map(|_| ())
                    .map_err(|_| BookingError::DoctorUnavailable {
                        doctor_id: doctor_id.to_string(),
                    })
            }
            WizardStep::Schedule => require(
                selection.date_label.is_some() && selection.time_label.is_some(),
                WizardStep::Schedule,
            ),
            // Nothing to advance to; the last step submits instead.
            WizardStep::Confirmation => Err(BookingError::IncompleteSelection {
                step: WizardStep::Confirmation,
            }),
        }
    }

    pub fn can_advance(&self, wizard: &BookingWizard) -> bool {
        self.check_advance(wizard).is_ok()
    }

    /// Move one step forward; silently stays put when the step is incomplete.
    pub fn advance(&self, mut wizard: BookingWizard) -> BookingWizard {
        match self.check_advance(&wizard) {
            Ok(()) => {
                let next = wizard.step.next();
                debug!("Wizard advancing from {} to {}", wizard.step, next);
                wizard.step = next;
            }
            Err(e) => debug!("Wizard advance refused: {}", e),
        }
        wizard
    }

    /// Move one step back. Selections are kept so the patient can move forward again.
    pub fn retreat(&self, mut wizard: BookingWizard) -> BookingWizard {
        wizard.step = wizard.step.previous();
        wizard
    }

    // ==========================================================================
    // CONFIRMATION
    // ==========================================================================

    pub fn summary(&self, wizard: &BookingWizard) -> ConfirmationSummary {
        ConfirmationAssembler::assemble(&wizard.selection, &self.directory)
    }

    /// Re-validate the whole selection in step order.
    pub fn validate_selection(&self, selection: &BookingSelection) -> Result<(), BookingError> {
        if let Some(step) = selection.first_incomplete_step() {
            return Err(BookingError::IncompleteSelection { step });
        }

        let specialty_known = selection
            .specialty_id
            .as_deref()
            .and_then(|id| self.directory.specialty(id))
            .is_some();
        require(specialty_known, WizardStep::Specialty)?;

        if let Some(doctor_id) = selection.doctor_id.as_deref() {
            if AvailabilityFilter::check_selectable(&self.directory, doctor_id).is_err() {
                return Err(BookingError::DoctorUnavailable {
                    doctor_id: doctor_id.to_string(),
                });
            }
        }

        let slot_known = selection
            .time_label
            .as_deref()
            .and_then(|label| self.directory.time_slot(label))
            .is_some();
        require(slot_known, WizardStep::Schedule)
    }

    /// Hand the finished selection to the booking collaborator.
    ///
    /// On success the flow is over and the wizard is dropped. On failure the
    /// wizard comes back inside the rejection, moved to the step to fix.
    pub async fn submit(&self, wizard: BookingWizard) -> Result<ConfirmedAppointment, SubmitRejection> {
        if wizard.step != WizardStep::Confirmation {
            let error = BookingError::NotAtConfirmation { step: wizard.step };
            return Err(SubmitRejection { wizard, error });
        }

        if let Err(error) = self.validate_selection(&wizard.selection) {
            warn!("Refusing to submit invalid selection: {}", error);
            return Err(reject(wizard, error));
        }

        match self.collaborator.submit_booking(&wizard.selection).await {
            Ok(confirmed) => {
                info!(
                    "Booking confirmed: appointment {} with {} on {} at {}",
                    confirmed.appointment_id, confirmed.doctor_name, confirmed.date_label, confirmed.time_label
                );
                Ok(confirmed)
            }
            Err(error) => {
                warn!("Booking submission rejected: {}", error);
                Err(reject(wizard, error))
            }
        }
    }
}

fn require(condition: bool, step: WizardStep) -> Result<(), BookingError> {
    if condition {
        Ok(())
    } else {
        Err(BookingError::IncompleteSelection { step })
    }
}

fn reject(mut wizard: BookingWizard, error: BookingError) -> SubmitRejection {
    wizard.step = error.recovery_step(wizard.step);
    SubmitRejection { wizard, error }
}
