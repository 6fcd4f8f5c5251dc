use tracing::{debug, warn};

use crate::models::{Appointment, AppointmentError};

/// Double-booking checks over a set of appointments.
pub struct ConflictDetectionService;

impl ConflictDetectionService {
    /// Fail if another active appointment already holds the doctor's slot.
    ///
    /// `exclude_appointment_id` skips the appointment being moved, so
    /// rescheduling onto its own slot is not a conflict.
    pub fn check_slot(
        appointments: &[Appointment],
        doctor_id: &str,
        date: &str,
        time: &str,
        exclude_appointment_id: Option<&str>,
    ) -> Result<(), AppointmentError> {
        debug!("Checking slot {} {} for doctor {}", date, time, doctor_id);

        let conflict = appointments
            .iter()
            .filter(|a| Some(a.id.as_str()) != exclude_appointment_id)
            .find(|a| a.occupies(doctor_id, date, time));

        if let Some(existing) = conflict {
            warn!(
                "Conflict detected for doctor {} at {} {} (held by appointment {})",
                doctor_id, date, time, existing.id
            );
            return Err(AppointmentError::SlotTaken {
                doctor_id: doctor_id.to_string(),
                date: date.to_string(),
                time: time.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentStatus, VisitType};

    fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: id.to_string(),
            doctor_id: "2".to_string(),
            doctor: "Dr. Michael Ross".to_string(),
            specialty: "Cardiologist".to_string(),
            date: "Feb 18".to_string(),
            time: "2:30 PM".to_string(),
            status,
            visit_type: VisitType::InPerson,
            notes: None,
        }
    }

    #[test]
    fn upcoming_appointment_blocks_slot() {
        let existing = vec![appointment("a", AppointmentStatus::Upcoming)];
        let result = ConflictDetectionService::check_slot(&existing, "2", "Feb 18", "2:30 PM", None);
        assert!(matches!(result, Err(AppointmentError::SlotTaken { .. })));
    }

    #[test]
    fn cancelled_appointment_frees_slot() {
        let existing = vec![appointment("a", AppointmentStatus::Cancelled)];
        assert!(ConflictDetectionService::check_slot(&existing, "2", "Feb 18", "2:30 PM", None).is_ok());
    }

    #[test]
    fn excluded_appointment_is_ignored() {
        let existing = vec![appointment("a", AppointmentStatus::Upcoming)];
        assert!(ConflictDetectionService::check_slot(&existing, "2", "Feb 18", "2:30 PM", Some("a")).is_ok());
    }

    #[test]
    fn other_doctor_same_time_is_free() {
        let existing = vec![appointment("a", AppointmentStatus::Upcoming)];
        assert!(ConflictDetectionService::check_slot(&existing, "1", "Feb 18", "2:30 PM", None).is_ok());
    }
}
