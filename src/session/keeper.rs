use std::sync::Arc;

use crate::session::store::{SessionError, SessionStore};
use crate::session::types::Session;

/// Restore/save/clear over any [`SessionStore`].
///
/// Cloning shares the underlying store.
#[derive(Clone)]
pub struct SessionKeeper {
    store: Arc<dyn SessionStore>,
}

impl SessionKeeper {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session persisted by an earlier run, if any.
    ///
    /// Unreadable or corrupt data is logged and treated as logged out.
    pub fn restore(&self) -> Option<Session> {
        match self.store.get() {
            Ok(Some(session)) => {
                tracing::info!(email = ?session.email(), "Restored session");
                Some(session)
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring unreadable session");
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        self.store.set(session)?;
        tracing::info!(email = ?session.email(), "Session saved");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        tracing::info!("Session cleared");
        Ok(())
    }
}
