use crate::session::SearchSession;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

pub struct AppState {
    pub session: Mutex<SearchSession>,
    pub search_delay: Duration,
}

impl AppState {
    pub fn new(session: SearchSession, search_delay: Duration) -> Self {
        Self {
            session: Mutex::new(session),
            search_delay,
        }
    }

    /// A poisoned lock still guards a consistent session: searches never
    /// leave it half-updated.
    pub fn session(&self) -> MutexGuard<'_, SearchSession> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
