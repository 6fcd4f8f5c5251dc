pub mod book;
pub mod conflict;
pub mod booking;

pub use book::{AppointmentSource, InMemoryAppointmentBook};
pub use conflict::ConflictDetectionService;
