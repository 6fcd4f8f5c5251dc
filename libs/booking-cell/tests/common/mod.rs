#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use booking_cell::*;
use doctor_cell::DoctorDirectory;

mock! {
    pub Collaborator {}

    #[async_trait]
    impl BookingCollaborator for Collaborator {
        async fn submit_booking(&self, selection: &BookingSelection) -> Result<ConfirmedAppointment, BookingError>;
    }
}

pub fn create_controller(collaborator: MockCollaborator) -> StepController {
    StepController::new(Arc::new(DoctorDirectory::standard()), Arc::new(collaborator))
}

/// Controller whose collaborator must never be reached.
pub fn navigation_controller() -> StepController {
    let mut collaborator = MockCollaborator::new();
    collaborator.expect_submit_booking().never();
    create_controller(collaborator)
}

pub fn confirmed_from(selection: &BookingSelection) -> ConfirmedAppointment {
    ConfirmedAppointment {
        appointment_id: "apt-1".to_string(),
        doctor_id: selection.doctor_id.clone().unwrap_or_default(),
        doctor_name: "Dr. Michael Ross".to_string(),
        specialty: "Cardiologist".to_string(),
        date_label: selection.date_label.clone().unwrap_or_default(),
        time_label: selection.time_label.clone().unwrap_or_default(),
        visit_type: selection.visit_type,
        notes: selection.notes.clone(),
        confirmed_at: Utc::now(),
    }
}

/// Walk a fresh wizard to the confirmation step with cardio / doctor 2 / Feb 16 2:00 PM.
pub fn wizard_at_confirmation(controller: &StepController) -> BookingWizard {
    let wizard = controller.start();
    let wizard = controller.select_specialty(wizard, "cardio");
    let wizard = controller.advance(wizard);
    let wizard = controller.select_doctor(wizard, "2");
    let wizard = controller.advance(wizard);
    let wizard = controller.select_date(wizard, "Feb 16");
    let wizard = controller.select_time(wizard, "2:00 PM");
    let wizard = controller.advance(wizard);
    assert_eq!(wizard.step(), WizardStep::Confirmation);
    wizard
}
