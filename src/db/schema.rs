use std::path::Path;

use rusqlite::Connection;

use crate::error::ContactsResult;

/// Initialize the database schema. Creates the contacts table if it doesn't exist.
pub fn initialize(conn: &Connection) -> ContactsResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT,
            contact_type TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

/// Open (or create) the database file at `path` and make sure the schema exists.
pub fn open(path: &Path) -> ContactsResult<Connection> {
    let conn = Connection::open(path)?;
    initialize(&conn)?;
    tracing::debug!(path = %path.display(), "Opened contacts database");
    Ok(conn)
}

pub fn open_in_memory() -> ContactsResult<Connection> {
    let conn = Connection::open_in_memory()?;
    initialize(&conn)?;
    Ok(conn)
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    open_in_memory().expect("in-memory database should initialize")
}
