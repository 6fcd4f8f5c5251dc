// libs/appointment-cell/tests/book_test.rs

use std::sync::Arc;

use assert_matches::assert_matches;

use appointment_cell::*;
use booking_cell::{BookingCollaborator, BookingError, BookingSelection, StepController, WizardStep};
use doctor_cell::DoctorDirectory;

fn create_book() -> Arc<InMemoryAppointmentBook> {
    Arc::new(InMemoryAppointmentBook::seeded(Arc::new(DoctorDirectory::standard())))
}

fn new_appointment(doctor_id: &str, date: &str, time: &str) -> NewAppointment {
    NewAppointment {
        doctor_id: doctor_id.to_string(),
        doctor: "Dr. Emily Watson".to_string(),
        specialty: "Dermatologist".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        visit_type: VisitType::Video,
        notes: None,
    }
}

fn selection(doctor_id: &str, date: &str, time: &str) -> BookingSelection {
    BookingSelection {
        specialty_id: Some("derm".to_string()),
        doctor_id: Some(doctor_id.to_string()),
        date_label: Some(date.to_string()),
        time_label: Some(time.to_string()),
        ..BookingSelection::default()
    }
}

#[tokio::test]
async fn test_seeded_book_lists_upcoming() {
    let book = create_book();

    let all = book.list(AppointmentFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let completed = book
        .list(AppointmentFilter { status: Some(AppointmentStatus::Completed) })
        .await
        .unwrap();
    assert!(completed.is_empty());
}

#[tokio::test]
async fn test_get_by_id() {
    let book = create_book();

    let appointment = book.get("2").await.unwrap();
    assert_eq!(appointment.doctor, "Dr. Michael Ross");
    assert_eq!(appointment.visit_type, VisitType::InPerson);

    assert_matches!(book.get("missing").await, Err(AppointmentError::NotFound(_)));
}

#[tokio::test]
async fn test_create_assigns_id_and_upcoming_status() {
    let book = create_book();

    let created = book.create(new_appointment("3", "Feb 20", "9:00 AM")).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.status, AppointmentStatus::Upcoming);

    let fetched = book.get(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_rejects_double_booking() {
    let book = create_book();

    book.create(new_appointment("3", "Feb 20", "9:00 AM")).await.unwrap();
    let result = book.create(new_appointment("3", "Feb 20", "9:00 AM")).await;

    assert_matches!(result, Err(AppointmentError::SlotTaken { .. }));
}

#[tokio::test]
async fn test_create_requires_date_and_time() {
    let book = create_book();
    let result = book.create(new_appointment("3", " ", "9:00 AM")).await;
    assert_matches!(result, Err(AppointmentError::Validation(_)));
}

#[tokio::test]
async fn test_reschedule_moves_appointment() {
    let book = create_book();

    let moved = book
        .reschedule("1", RescheduleRequest { date: "Feb 17".to_string(), time: "11:00 AM".to_string() })
        .await
        .unwrap();

    assert_eq!(moved.date, "Feb 17");
    assert_eq!(moved.time, "11:00 AM");
    assert_eq!(book.get("1").await.unwrap().time, "11:00 AM");
}

#[tokio::test]
async fn test_reschedule_onto_own_slot_is_allowed() {
    let book = create_book();

    let result = book
        .reschedule("2", RescheduleRequest { date: "Feb 18".to_string(), time: "2:30 PM".to_string() })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_reschedule_errors() {
    let book = create_book();
    let request = || RescheduleRequest { date: "Feb 18".to_string(), time: "2:30 PM".to_string() };

    assert_matches!(book.reschedule("missing", request()).await, Err(AppointmentError::NotFound(_)));

    // Another upcoming appointment of doctor 2 already holds this slot
    let other = book.create(new_appointment("2", "Feb 19", "3:00 PM")).await.unwrap();
    assert_matches!(
        book.reschedule(&other.id, request()).await,
        Err(AppointmentError::SlotTaken { .. })
    );

    let bad_time = RescheduleRequest { date: "Feb 19".to_string(), time: "7:15 PM".to_string() };
    assert_matches!(book.reschedule("1", bad_time).await, Err(AppointmentError::Validation(_)));
}

#[tokio::test]
async fn test_cannot_reschedule_completed() {
    let directory = Arc::new(DoctorDirectory::standard());
    let completed = Appointment {
        id: "old".to_string(),
        doctor_id: "1".to_string(),
        doctor: "Dr. Sarah Chen".to_string(),
        specialty: "General Practitioner".to_string(),
        date: "Jan 5, 2026".to_string(),
        time: "9:00 AM".to_string(),
        status: AppointmentStatus::Completed,
        visit_type: VisitType::Video,
        notes: None,
    };
    let book = InMemoryAppointmentBook::with_appointments(directory, vec![completed]);

    let result = book
        .reschedule("old", RescheduleRequest { date: "Feb 20".to_string(), time: "9:00 AM".to_string() })
        .await;

    assert_matches!(result, Err(AppointmentError::InvalidStatus(AppointmentStatus::Completed)));
}

// ==============================================================================
// BOOKING COLLABORATOR
// ==============================================================================

#[tokio::test]
async fn test_submit_booking_creates_appointment() {
    let book = create_book();

    let confirmed = book.submit_booking(&selection("3", "Feb 16", "2:00 PM")).await.unwrap();

    assert_eq!(confirmed.doctor_name, "Dr. Emily Watson");
    assert_eq!(confirmed.specialty, "Dermatologist");

    let stored = book.get(&confirmed.appointment_id).await.unwrap();
    assert_eq!(stored.date, "Feb 16");
    assert_eq!(stored.status, AppointmentStatus::Upcoming);
}

#[tokio::test]
async fn test_submit_booking_rejects_unavailable_doctor() {
    let book = create_book();
    let result = book.submit_booking(&selection("4", "Feb 16", "2:00 PM")).await;
    assert_matches!(result, Err(BookingError::DoctorUnavailable { .. }));
}

#[tokio::test]
async fn test_submit_booking_incomplete_selection() {
    let book = create_book();
    let partial = BookingSelection {
        specialty_id: Some("derm".to_string()),
        ..BookingSelection::default()
    };

    let result = book.submit_booking(&partial).await;
    assert_matches!(result, Err(BookingError::IncompleteSelection { step: WizardStep::Doctor }));
}

#[tokio::test]
async fn test_second_wizard_for_same_slot_returns_to_schedule() {
    let book = create_book();
    let controller = StepController::new(Arc::new(DoctorDirectory::standard()), book.clone());

    let walk = || {
        let wizard = controller.start();
        let wizard = controller.select_specialty(wizard, "cardio");
        let wizard = controller.advance(wizard);
        let wizard = controller.select_doctor(wizard, "2");
        let wizard = controller.advance(wizard);
        let wizard = controller.select_date(wizard, "Feb 16");
        let wizard = controller.select_time(wizard, "2:00 PM");
        controller.advance(wizard)
    };

    let first = controller.submit(walk()).await.expect("first booking succeeds");
    assert_eq!(first.doctor_name, "Dr. Michael Ross");

    let rejection = controller.submit(walk()).await.unwrap_err();
    assert_matches!(rejection.error, BookingError::SlotTaken { .. });
    assert_eq!(rejection.wizard.step(), WizardStep::Schedule);
    assert_eq!(rejection.wizard.selection().time_label.as_deref(), Some("2:00 PM"));

    let upcoming = book
        .list(AppointmentFilter { status: Some(AppointmentStatus::Upcoming) })
        .await
        .unwrap();
    assert_eq!(upcoming.len(), 3);
}

#[tokio::test]
async fn test_wizard_cannot_take_seeded_slot() {
    let book = create_book();
    let controller = StepController::new(Arc::new(DoctorDirectory::standard()), book.clone());

    let wizard = controller.start();
    let wizard = controller.select_specialty(wizard, "cardio");
    let wizard = controller.advance(wizard);
    let wizard = controller.select_doctor(wizard, "2");
    let wizard = controller.advance(wizard);
    let wizard = controller.select_date(wizard, "Feb 18");
    let wizard = controller.select_time(wizard, "2:30 PM");
    let wizard = controller.advance(wizard);
    assert_eq!(wizard.step(), WizardStep::Confirmation);

    let rejection = controller.submit(wizard).await.unwrap_err();
    assert_matches!(rejection.error, BookingError::SlotTaken { .. });
    assert_eq!(rejection.wizard.step(), WizardStep::Schedule);

    let ross: Vec<Appointment> = book
        .list(AppointmentFilter::default())
        .await
        .unwrap()
        .into_iter()
        .filter(|a| a.doctor_id == "2")
        .collect();
    assert_eq!(ross.len(), 1);
}

#[tokio::test]
async fn test_create_trims_slot_before_conflict_check() {
    let book = create_book();
    let result = book.create(new_appointment("2", " Feb 18 ", "2:30 PM ")).await;
    assert_matches!(result, Err(AppointmentError::SlotTaken { .. }));
}
