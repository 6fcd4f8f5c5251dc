use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq)]
pub enum RequestError<E> {
    #[error("Request was superseded by a newer request")]
    Superseded,

    #[error("Request failed: {0}")]
    Failed(E),
}

/// Keeps at most one live request per screen.
///
/// Every call to [`LatestRequest::run`] takes a new generation. When a call
/// completes after a newer one has started, its result is dropped and the
/// caller gets [`RequestError::Superseded`]. Results are never merged.
#[derive(Debug, Default)]
pub struct LatestRequest {
    generation: AtomicU64,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating whatever is in flight.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    pub async fn run<F, T, E>(&self, request: F) -> Result<T, RequestError<E>>
    where
        F: Future<Output = Result<T, E>>,
    {
        let ticket = self.begin();
        let outcome = request.await;

        if !self.is_current(ticket) {
            debug!("Dropping result of superseded request {}", ticket);
            return Err(RequestError::Superseded);
        }

        outcome.map_err(RequestError::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::time::Duration;

    async fn delayed(value: u32, millis: u64) -> Result<u32, String> {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Ok(value)
    }

    #[tokio::test]
    async fn single_request_resolves_once() {
        let latest = LatestRequest::new();
        let result = latest.run(delayed(7, 1)).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn newer_request_supersedes_older() {
        let latest = LatestRequest::new();

        let (first, second) = tokio::join!(
            latest.run(delayed(1, 50)),
            latest.run(delayed(2, 5)),
        );

        assert_matches!(first, Err(RequestError::Superseded));
        assert_eq!(second, Ok(2));
    }

    #[tokio::test]
    async fn failure_of_current_request_is_reported() {
        let latest = LatestRequest::new();
        let result: Result<u32, _> = latest.run(async { Err("offline".to_string()) }).await;
        assert_eq!(result, Err(RequestError::Failed("offline".to_string())));
    }
}
