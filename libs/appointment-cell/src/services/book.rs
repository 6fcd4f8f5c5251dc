use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use doctor_cell::DoctorDirectory;

use crate::models::{
    Appointment, AppointmentError, AppointmentFilter, AppointmentStatus, NewAppointment, RescheduleRequest,
    VisitType,
};
use crate::services::conflict::ConflictDetectionService;

/// Where the app reads and writes appointments.
#[async_trait]
pub trait AppointmentSource: Send + Sync {
    async fn list(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>, AppointmentError>;

    async fn get(&self, appointment_id: &str) -> Result<Appointment, AppointmentError>;

    async fn create(&self, request: NewAppointment) -> Result<Appointment, AppointmentError>;

    async fn reschedule(
        &self,
        appointment_id: &str,
        request: RescheduleRequest,
    ) -> Result<Appointment, AppointmentError>;
}

/// Process-local appointment store.
pub struct InMemoryAppointmentBook {
    pub(crate) directory: Arc<DoctorDirectory>,
    appointments: RwLock<Vec<Appointment>>,
}

impl InMemoryAppointmentBook {
    pub fn new(directory: Arc<DoctorDirectory>) -> Self {
        Self::with_appointments(directory, Vec::new())
    }

    pub fn with_appointments(directory: Arc<DoctorDirectory>, appointments: Vec<Appointment>) -> Self {
        Self {
            directory,
            appointments: RwLock::new(appointments),
        }
    }

    /// Book preloaded with the two upcoming demo appointments.
    ///
    /// Dates use the same short labels the booking wizard offers ("Feb 18"),
    /// so wizard bookings collide with these slots.
    pub fn seeded(directory: Arc<DoctorDirectory>) -> Self {
        let appointments = [
            ("1", "1", "Dr. Sarah Chen", "General Practitioner", "Feb 15", "10:00 AM", VisitType::Video),
            ("2", "2", "Dr. Michael Ross", "Cardiologist", "Feb 18", "2:30 PM", VisitType::InPerson),
        ]
        .into_iter()
        .map(|(id, doctor_id, doctor, specialty, date, time, visit_type)| Appointment {
            id: id.to_string(),
            doctor_id: doctor_id.to_string(),
            doctor: doctor.to_string(),
            specialty: specialty.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            status: AppointmentStatus::Upcoming,
            visit_type,
            notes: None,
        })
        .collect();

        Self::with_appointments(directory, appointments)
    }
}

#[async_trait]
impl AppointmentSource for InMemoryAppointmentBook {
    async fn list(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>, AppointmentError> {
        let appointments = self.appointments.read().await;

        Ok(appointments
            .iter()
            .filter(|a| filter.status.map_or(true, |status| a.status == status))
            .cloned()
            .collect())
    }

    async fn get(&self, appointment_id: &str) -> Result<Appointment, AppointmentError> {
        self.appointments
            .read()
            .await
            .iter()
            .find(|a| a.id == appointment_id)
            .cloned()
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))
    }

    async fn create(&self, request: NewAppointment) -> Result<Appointment, AppointmentError> {
        let date = request.date.trim().to_string();
        let time = request.time.trim().to_string();
        if date.is_empty() || time.is_empty() {
            return Err(AppointmentError::Validation("date and time are required".to_string()));
        }

        // Check and insert under one write lock so two bookings cannot take the same slot
        let mut appointments = self.appointments.write().await;
        ConflictDetectionService::check_slot(&appointments, &request.doctor_id, &date, &time, None)?;

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            doctor_id: request.doctor_id,
            doctor: request.doctor,
            specialty: request.specialty,
            date,
            time,
            status: AppointmentStatus::Upcoming,
            visit_type: request.visit_type,
            notes: request.notes,
        };
        appointments.push(appointment.clone());

        info!(
            "Appointment {} created with {} on {} at {}",
            appointment.id, appointment.doctor, appointment.date, appointment.time
        );
        Ok(appointment)
    }

    async fn reschedule(
        &self,
        appointment_id: &str,
        request: RescheduleRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Rescheduling appointment {} to {} {}", appointment_id, request.date, request.time);

        if self.directory.time_slot(&request.time).is_none() {
            return Err(AppointmentError::Validation(format!("unknown time slot: {}", request.time)));
        }

        let mut appointments = self.appointments.write().await;
        let index = appointments
            .iter()
            .position(|a| a.id == appointment_id)
            .ok_or_else(|| AppointmentError::NotFound(appointment_id.to_string()))?;

        let status = appointments[index].status;
        if !status.can_reschedule() {
            return Err(AppointmentError::InvalidStatus(status));
        }

        let doctor_id = appointments[index].doctor_id.clone();
        ConflictDetectionService::check_slot(
            &appointments,
            &doctor_id,
            &request.date,
            &request.time,
            Some(appointment_id),
        )?;

        let appointment = &mut appointments[index];
        appointment.date = request.date;
        appointment.time = request.time;

        info!("Appointment {} rescheduled to {} {}", appointment.id, appointment.date, appointment.time);
        Ok(appointment.clone())
    }
}
