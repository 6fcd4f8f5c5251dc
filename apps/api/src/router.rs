use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::{appointment_routes, AppointmentCellState, InMemoryAppointmentBook};
use booking_cell::{booking_routes, BookingCellState, StepController};
use doctor_cell::{doctor_routes, DoctorCellState, DoctorDirectory};
use records_cell::{records_routes, InMemoryRecordStore, RecordsCellState};
use shared_config::AppConfig;
use subscription_cell::{subscription_routes, MockPurchasesProvider, SubscriptionCellState};
use symptom_cell::{symptom_routes, SymptomCellState};

pub fn create_router(config: Arc<AppConfig>) -> Router {
    let directory = Arc::new(DoctorDirectory::standard());

    // The wizard submits into the same book the appointments tab reads
    let book = Arc::new(InMemoryAppointmentBook::seeded(directory.clone()));
    let controller = StepController::new(directory.clone(), book.clone());

    let doctor_state = Arc::new(DoctorCellState::new(config.clone(), directory));
    let booking_state = Arc::new(BookingCellState::new(&config, controller));
    let appointment_state = Arc::new(AppointmentCellState::new(book));
    let records_state = Arc::new(RecordsCellState::new(Arc::new(InMemoryRecordStore::seeded())));
    let subscription_state = Arc::new(SubscriptionCellState::new(Arc::new(MockPurchasesProvider::new())));
    let symptom_state = Arc::new(SymptomCellState::new(&config));

    Router::new()
        .route("/", get(|| async { "Telehealth API is running!" }))
        .nest("/catalog", doctor_routes(doctor_state))
        .nest("/bookings", booking_routes(booking_state))
        .nest("/appointments", appointment_routes(appointment_state))
        .nest("/records", records_routes(records_state))
        .nest("/subscription", subscription_routes(subscription_state))
        .nest("/symptoms", symptom_routes(symptom_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use shared_utils::test_utils::TestConfig;
    use tower::ServiceExt;

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let app = create_router(TestConfig::default().to_arc());
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");

        app.oneshot(request).await.expect("infallible").status()
    }

    #[tokio::test]
    async fn root_responds() {
        assert_eq!(status_of("GET", "/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn cells_are_mounted() {
        assert_eq!(status_of("GET", "/catalog/specialties").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/appointments").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/records/1").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/subscription/offerings").await, StatusCode::OK);
        assert_eq!(status_of("POST", "/bookings").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/symptoms/categories?q=cough").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_appointment_is_not_found() {
        assert_eq!(status_of("GET", "/appointments/missing").await, StatusCode::NOT_FOUND);
    }
}
