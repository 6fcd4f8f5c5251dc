use async_trait::async_trait;

use crate::error::BookingError;
use crate::models::{BookingSelection, ConfirmedAppointment};

/// Receives finished bookings from the wizard.
///
/// Implementations own persistence and slot bookkeeping. A slot that was
/// free when selected may be gone by submission time; that is reported as
/// [`BookingError::SlotTaken`]. An unreachable backend is [`BookingError::Transport`].
#[async_trait]
pub trait BookingCollaborator: Send + Sync {
    async fn submit_booking(&self, selection: &BookingSelection) -> Result<ConfirmedAppointment, BookingError>;
}
