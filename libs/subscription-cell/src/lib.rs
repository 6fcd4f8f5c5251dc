pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
pub use handlers::SubscriptionCellState;
pub use router::subscription_routes;
