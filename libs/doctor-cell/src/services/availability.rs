use tracing::debug;

use crate::models::{Doctor, DoctorError, DoctorListing};
use crate::services::directory::DoctorDirectory;

/// Decides which doctors may be booked.
///
/// Unavailable doctors stay listed so patients can discover them, but they
/// are never selectable.
pub struct AvailabilityFilter;

impl AvailabilityFilter {
    pub fn is_selectable(doctor: &Doctor) -> bool {
        doctor.available
    }

    pub fn selectable<'a>(doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
        doctors.iter().filter(|d| Self::is_selectable(d)).collect()
    }

    /// Resolve `doctor_id` and confirm it can be booked.
    pub fn check_selectable<'a>(
        directory: &'a DoctorDirectory,
        doctor_id: &str,
    ) -> Result<&'a Doctor, DoctorError> {
        let doctor = directory
            .doctor(doctor_id)
            .ok_or_else(|| DoctorError::NotFound(doctor_id.to_string()))?;

        if !Self::is_selectable(doctor) {
            debug!("Doctor {} rejected: not available", doctor_id);
            return Err(DoctorError::NotAvailable(doctor_id.to_string()));
        }

        Ok(doctor)
    }

    /// Every doctor, each flagged with whether it can be selected.
    pub fn listings(doctors: &[Doctor]) -> Vec<DoctorListing> {
        doctors
            .iter()
            .map(|doctor| DoctorListing {
                initials: doctor.initials(),
                selectable: Self::is_selectable(doctor),
                doctor: doctor.clone(),
            })
            .collect()
    }
}
