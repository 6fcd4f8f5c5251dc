pub mod directory;
pub mod availability;
pub mod scheduling;

pub use directory::DoctorDirectory;
pub use availability::AvailabilityFilter;
pub use scheduling::{standard_time_slots, upcoming_dates};
