//! Application state shared across handlers

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::error::{ContactsError, ContactsResult};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `f` with exclusive access to the connection. The lock is released
    /// before this returns, so callers must not hold it across an await.
    pub fn with_conn<R>(
        &self,
        f: impl FnOnce(&Connection) -> ContactsResult<R>,
    ) -> ContactsResult<R> {
        let conn = self.db.lock().map_err(|_| ContactsError::LockPoisoned)?;
        f(&conn)
    }
}
