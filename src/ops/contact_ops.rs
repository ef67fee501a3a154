use chrono::Utc;
use rusqlite::Connection;

use crate::db::contact_repo;
use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, ContactUpdate, Id, NewContact};
use crate::validation::{self, trim_optional};

pub fn list_contacts(conn: &Connection) -> ContactsResult<Vec<Contact>> {
    contact_repo::find_all(conn)
}

pub fn get_contact(conn: &Connection, id: Id<Contact>) -> ContactsResult<Contact> {
    contact_repo::find_by_id(conn, id)?.ok_or_else(|| ContactsError::contact_not_found(id))
}

pub fn create_contact(conn: &Connection, new: &NewContact) -> ContactsResult<Contact> {
    let name = validation::required(new.name.as_deref())?;
    let phone = validation::required(new.phone.as_deref())?;

    let mut contact = Contact::create(name, phone);
    contact.email = trim_optional(new.email.as_deref());
    contact.contact_type = trim_optional(new.contact_type.as_deref());

    let tx = conn.unchecked_transaction()?;
    contact_repo::insert(&tx, &contact)?;
    tx.commit()?;

    tracing::info!(contact_id = %contact.id, "Created contact");
    Ok(contact)
}

pub fn update_contact(
    conn: &Connection,
    id: Id<Contact>,
    update: &ContactUpdate,
) -> ContactsResult<Contact> {
    let tx = conn.unchecked_transaction()?;

    let mut updated = get_contact(&tx, id)?;

    if let Some(name) = &update.name {
        updated.name = required_field(name.as_deref(), "name")?;
    }
    if let Some(phone) = &update.phone {
        updated.phone = required_field(phone.as_deref(), "phone")?;
    }
    if let Some(email) = &update.email {
        updated.email = trim_optional(email.as_deref());
    }
    if let Some(contact_type) = &update.contact_type {
        updated.contact_type = trim_optional(contact_type.as_deref());
    }
    updated.updated_at = Utc::now();

    if !contact_repo::update(&tx, &updated)? {
        return Err(ContactsError::contact_not_found(id));
    }
    tx.commit()?;

    tracing::info!(contact_id = %id, "Updated contact");
    Ok(updated)
}

pub fn delete_contact(conn: &Connection, id: Id<Contact>) -> ContactsResult<()> {
    let tx = conn.unchecked_transaction()?;
    if !contact_repo::delete(&tx, id)? {
        return Err(ContactsError::contact_not_found(id));
    }
    tx.commit()?;

    tracing::info!(contact_id = %id, "Deleted contact");
    Ok(())
}

// An explicit null on a required column is as good as leaving it out at creation.
fn required_field(value: Option<&str>, field: &str) -> ContactsResult<String> {
    match value {
        Some(v) => validation::non_blank(v, field),
        None => Err(ContactsError::MissingRequiredFields),
    }
}
