use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use booking_cell::{BookingCollaborator, BookingError, BookingSelection, ConfirmedAppointment, WizardStep};

use crate::models::{AppointmentError, NewAppointment};
use crate::services::book::{AppointmentSource, InMemoryAppointmentBook};

/// Finished wizard selections land in the appointment book.
#[async_trait]
impl BookingCollaborator for InMemoryAppointmentBook {
    async fn submit_booking(&self, selection: &BookingSelection) -> Result<ConfirmedAppointment, BookingError> {
        let (Some(doctor_id), Some(date_label), Some(time_label)) = (
            selection.doctor_id.as_deref(),
            selection.date_label.as_deref(),
            selection.time_label.as_deref(),
        ) else {
            let step = selection.first_incomplete_step().unwrap_or(WizardStep::Schedule);
            return Err(BookingError::IncompleteSelection { step });
        };

        let doctor = self
            .directory
            .doctor(doctor_id)
            .filter(|d| d.available)
            .ok_or_else(|| BookingError::DoctorUnavailable {
                doctor_id: doctor_id.to_string(),
            })?;

        let request = NewAppointment {
            doctor_id: doctor.id.clone(),
            doctor: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            date: date_label.to_string(),
            time: time_label.to_string(),
            visit_type: selection.visit_type,
            notes: selection.notes.clone(),
        };

        let appointment = self.create(request).await.map_err(|err| match err {
            AppointmentError::SlotTaken { doctor_id, date, time } => BookingError::SlotTaken {
                doctor_id,
                date_label: date,
                time_label: time,
            },
            other => {
                warn!("Appointment book rejected booking: {}", other);
                BookingError::Transport(other.to_string())
            }
        })?;

        info!("Booking confirmed as appointment {}", appointment.id);

        Ok(ConfirmedAppointment {
            appointment_id: appointment.id,
            doctor_id: appointment.doctor_id,
            doctor_name: appointment.doctor,
            specialty: appointment.specialty,
            date_label: appointment.date,
            time_label: appointment.time,
            visit_type: appointment.visit_type,
            notes: appointment.notes,
            confirmed_at: Utc::now(),
        })
    }
}
