pub mod store;

pub use store::{InMemoryRecordStore, RecordSource};
