pub mod purchases;

pub use purchases::{MockPurchasesProvider, PurchasesProvider};
