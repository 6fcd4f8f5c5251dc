pub mod request;
pub mod test_utils;

pub use request::{LatestRequest, RequestError};
