use tracing::debug;

use crate::models::{Doctor, Specialty, TimeSlot};
use crate::services::scheduling::standard_time_slots;

/// Static reference data for booking: specialties, doctors and time slots.
///
/// The lists are immutable once built; callers share one instance behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    specialties: Vec<Specialty>,
    doctors: Vec<Doctor>,
    time_slots: Vec<TimeSlot>,
}

impl DoctorDirectory {
    pub fn new(specialties: Vec<Specialty>, doctors: Vec<Doctor>, time_slots: Vec<TimeSlot>) -> Self {
        Self {
            specialties,
            doctors,
            time_slots,
        }
    }

    /// The clinic's standard reference lists.
    pub fn standard() -> Self {
        let specialties = [
            ("gp", "General Practitioner", "👨‍⚕️"),
            ("cardio", "Cardiologist", "❤️"),
            ("derm", "Dermatologist", "🩺"),
            ("neuro", "Neurologist", "🧠"),
            ("ortho", "Orthopedist", "🦴"),
            ("peds", "Pediatrician", "👶"),
        ]
        .into_iter()
        .map(|(id, display_name, icon)| Specialty {
            id: id.to_string(),
            display_name: display_name.to_string(),
            icon: icon.to_string(),
        })
        .collect();

        let doctors = [
            ("1", "Dr. Sarah Chen", "General Practitioner", 4.9, 128, true),
            ("2", "Dr. Michael Ross", "Cardiologist", 4.8, 95, true),
            ("3", "Dr. Emily Watson", "Dermatologist", 4.9, 156, true),
            ("4", "Dr. James Lee", "Neurologist", 4.7, 82, false),
        ]
        .into_iter()
        .map(|(id, name, specialty, rating, review_count, available)| Doctor {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
            rating,
            review_count,
            available,
        })
        .collect();

        let directory = Self::new(specialties, doctors, standard_time_slots());
        debug!(
            "Doctor directory loaded: {} specialties, {} doctors, {} time slots",
            directory.specialties.len(),
            directory.doctors.len(),
            directory.time_slots.len()
        );
        directory
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn specialty(&self, id: &str) -> Option<&Specialty> {
        self.specialties.iter().find(|s| s.id == id)
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn time_slot(&self, label: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|t| t.label == label)
    }
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        Self::standard()
    }
}
