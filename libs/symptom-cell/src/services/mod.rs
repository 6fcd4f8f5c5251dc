pub mod analyzer;
pub mod catalog;

pub use analyzer::SymptomAnalyzer;
pub use catalog::SymptomCatalog;
