use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, Id};

const COLUMNS: &str = "id, name, phone, email, contact_type, created_at, updated_at";

pub fn insert(conn: &Connection, contact: &Contact) -> ContactsResult<()> {
    conn.execute(
        "INSERT INTO contacts (id, name, phone, email, contact_type, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            contact.id,
            contact.name,
            contact.phone,
            contact.email,
            contact.contact_type,
            timestamp(&contact.created_at),
            timestamp(&contact.updated_at),
        ],
    )?;
    Ok(())
}

/// Overwrites every mutable column. Returns false when no row has this id.
pub fn update(conn: &Connection, contact: &Contact) -> ContactsResult<bool> {
    let changed = conn.execute(
        "UPDATE contacts SET name = ?1, phone = ?2, email = ?3, contact_type = ?4, updated_at = ?5
         WHERE id = ?6",
        params![
            contact.name,
            contact.phone,
            contact.email,
            contact.contact_type,
            timestamp(&contact.updated_at),
            contact.id,
        ],
    )?;
    Ok(changed > 0)
}

/// Returns false when no row has this id.
pub fn delete(conn: &Connection, id: Id<Contact>) -> ContactsResult<bool> {
    let removed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
    Ok(removed > 0)
}

pub fn find_by_id(conn: &Connection, id: Id<Contact>) -> ContactsResult<Option<Contact>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1"))?;

    stmt.query_row(params![id], |row| Ok(row_to_contact(row)))
        .optional()?
        .transpose()
}

/// All contacts in insertion order.
pub fn find_all(conn: &Connection) -> ContactsResult<Vec<Contact>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM contacts ORDER BY created_at, rowid"
    ))?;

    let contacts = stmt
        .query_map([], |row| Ok(row_to_contact(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

// Fixed width so that text ordering matches time ordering.
fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(s: &str) -> ContactsResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ContactsError::Other(format!("Invalid timestamp {:?}: {}", s, e)))
}

fn row_to_contact(row: &rusqlite::Row) -> ContactsResult<Contact> {
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        contact_type: row.get(4)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
