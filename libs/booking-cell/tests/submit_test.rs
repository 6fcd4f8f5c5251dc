// libs/booking-cell/tests/submit_test.rs

mod common;

use assert_matches::assert_matches;

use booking_cell::*;
use common::{confirmed_from, create_controller, navigation_controller, wizard_at_confirmation, MockCollaborator};

#[tokio::test]
async fn test_submit_hands_selection_to_collaborator() {
    let mut collaborator = MockCollaborator::new();
    collaborator
        .expect_submit_booking()
        .withf(|s| {
            s.doctor_id.as_deref() == Some("2")
                && s.date_label.as_deref() == Some("Feb 16")
                && s.time_label.as_deref() == Some("2:00 PM")
        })
        .times(1)
        .returning(|s| Ok(confirmed_from(s)));
    let controller = create_controller(collaborator);

    let wizard = wizard_at_confirmation(&controller);
    let confirmed = controller.submit(wizard).await.expect("booking should be confirmed");

    assert_eq!(confirmed.doctor_name, "Dr. Michael Ross");
    assert_eq!(confirmed.time_label, "2:00 PM");
    assert_eq!(confirmed.visit_type, VisitType::Video);
}

#[tokio::test]
async fn test_submit_before_confirmation_is_rejected() {
    let controller = navigation_controller();
    let wizard = controller.advance(controller.select_specialty(controller.start(), "gp"));

    let rejection = controller.submit(wizard.clone()).await.unwrap_err();

    assert_matches!(rejection.error, BookingError::NotAtConfirmation { step: WizardStep::Doctor });
    assert_eq!(rejection.wizard, wizard);
}

#[tokio::test]
async fn test_slot_taken_returns_to_schedule_step() {
    let mut collaborator = MockCollaborator::new();
    collaborator.expect_submit_booking().times(1).returning(|s| {
        Err(BookingError::SlotTaken {
            doctor_id: s.doctor_id.clone().unwrap_or_default(),
            date_label: s.date_label.clone().unwrap_or_default(),
            time_label: s.time_label.clone().unwrap_or_default(),
        })
    });
    let controller = create_controller(collaborator);

    let wizard = wizard_at_confirmation(&controller);
    let selection = wizard.selection().clone();
    let rejection = controller.submit(wizard).await.unwrap_err();

    assert_matches!(rejection.error, BookingError::SlotTaken { .. });
    assert_eq!(rejection.wizard.step(), WizardStep::Schedule);
    assert_eq!(rejection.wizard.selection(), &selection);

    // Picking another time gets the patient back to confirmation
    let wizard = controller.select_time(rejection.wizard, "2:30 PM");
    let wizard = controller.advance(wizard);
    assert_eq!(wizard.step(), WizardStep::Confirmation);
}

#[tokio::test]
async fn test_transport_failure_stays_on_confirmation() {
    let mut collaborator = MockCollaborator::new();
    let mut attempts = 0;
    collaborator.expect_submit_booking().times(2).returning(move |s| {
        attempts += 1;
        if attempts == 1 {
            Err(BookingError::Transport("connection refused".to_string()))
        } else {
            Ok(confirmed_from(s))
        }
    });
    let controller = create_controller(collaborator);

    let wizard = wizard_at_confirmation(&controller);
    let rejection = controller.submit(wizard).await.unwrap_err();

    assert!(rejection.error.is_retryable());
    assert_eq!(rejection.wizard.step(), WizardStep::Confirmation);

    let confirmed = controller.submit(rejection.wizard).await.expect("retry should succeed");
    assert_eq!(confirmed.date_label, "Feb 16");
}

#[tokio::test]
async fn test_rejection_displays_underlying_error() {
    let mut collaborator = MockCollaborator::new();
    collaborator
        .expect_submit_booking()
        .returning(|_| Err(BookingError::Transport("timeout".to_string())));
    let controller = create_controller(collaborator);

    let rejection = controller.submit(wizard_at_confirmation(&controller)).await.unwrap_err();
    assert_eq!(rejection.to_string(), "Booking service unreachable: timeout");
}

#[test]
fn test_validate_selection_in_step_order() {
    let controller = navigation_controller();

    let incomplete = BookingSelection {
        specialty_id: Some("cardio".to_string()),
        ..BookingSelection::default()
    };
    assert_eq!(
        controller.validate_selection(&incomplete),
        Err(BookingError::IncompleteSelection { step: WizardStep::Doctor })
    );

    let unavailable = BookingSelection {
        specialty_id: Some("neuro".to_string()),
        doctor_id: Some("4".to_string()),
        date_label: Some("Feb 16".to_string()),
        time_label: Some("2:00 PM".to_string()),
        ..BookingSelection::default()
    };
    assert_eq!(
        controller.validate_selection(&unavailable),
        Err(BookingError::DoctorUnavailable { doctor_id: "4".to_string() })
    );
}
