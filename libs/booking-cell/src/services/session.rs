use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::BookingError;
use crate::services::controller::BookingWizard;

/// Default idle lifetime of a booking flow.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

struct Session {
    wizard: BookingWizard,
    last_touched: Instant,
}

/// In-flight booking flows, one wizard per session id.
///
/// Sessions are independent. A wizard is removed when its flow is submitted,
/// abandoned, or left untouched for longer than the store's TTL. Idle
/// sessions are evicted when a new one opens and are never returned.
pub struct BookingSessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl BookingSessionStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn is_live(&self, session: &Session, now: Instant) -> bool {
        now.duration_since(session.last_touched) <= self.ttl
    }

    pub async fn open(&self, wizard: BookingWizard) -> Uuid {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| self.is_live(s, now));
        if sessions.len() < before {
            info!("Evicted {} idle booking sessions", before - sessions.len());
        }

        let session_id = Uuid::new_v4();
        sessions.insert(session_id, Session { wizard, last_touched: now });
        debug!("Booking session {} opened", session_id);
        session_id
    }

    /// Drop every session idle past the TTL. Returns how many were removed.
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| self.is_live(s, now));
        before - sessions.len()
    }

    pub async fn get(&self, session_id: Uuid) -> Result<BookingWizard, BookingError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let session = self.live_entry(&mut sessions, session_id, now)?;

        session.last_touched = now;
        Ok(session.wizard.clone())
    }

    /// Apply a transition to the stored wizard and keep the result.
    ///
    /// The transition runs under the store's write lock, so nothing can
    /// change the wizard between reading it and storing the result.
    pub async fn update<F>(&self, session_id: Uuid, transition: F) -> Result<BookingWizard, BookingError>
    where
        F: FnOnce(BookingWizard) -> BookingWizard,
    {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let session = self.live_entry(&mut sessions, session_id, now)?;

        let next = transition(session.wizard.clone());
        session.wizard = next.clone();
        session.last_touched = now;
        Ok(next)
    }

    /// Remove the wizard, e.g. to submit it. Put it back with [`Self::restore`].
    pub async fn take(&self, session_id: Uuid) -> Result<BookingWizard, BookingError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        self.live_entry(&mut sessions, session_id, now)?;

        sessions
            .remove(&session_id)
            .map(|s| s.wizard)
            .ok_or(BookingError::SessionNotFound(session_id))
    }

    pub async fn restore(&self, session_id: Uuid, wizard: BookingWizard) {
        let session = Session {
            wizard,
            last_touched: Instant::now(),
        };
        self.sessions.write().await.insert(session_id, session);
    }

    pub async fn close(&self, session_id: Uuid) -> Result<(), BookingError> {
        self.take(session_id).await.map(|_| {
            debug!("Booking session {} closed", session_id);
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Look up a session, dropping it if it has gone idle.
    fn live_entry<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, Session>,
        session_id: Uuid,
        now: Instant,
    ) -> Result<&'a mut Session, BookingError> {
        let expired = sessions
            .get(&session_id)
            .is_some_and(|s| !self.is_live(s, now));
        if expired {
            debug!("Booking session {} expired", session_id);
            sessions.remove(&session_id);
        }

        sessions
            .get_mut(&session_id)
            .ok_or(BookingError::SessionNotFound(session_id))
    }
}

impl Default for BookingSessionStore {
    fn default() -> Self {
        Self::new()
    }
}
