use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, Request, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, ContactUpdate, Id, NewContact};
use crate::ops::contact_ops;
use crate::state::AppState;

/// JSON body extractor whose rejections come back in the `{"error": ...}` shape.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ContactsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err: JsonRejection| ContactsError::InvalidJson(err.body_text()))?;
        Ok(Self(payload))
    }
}

// Anything that isn't a UUID can't name a stored contact.
fn parse_id(raw: &str) -> ContactsResult<Id<Contact>> {
    raw.parse()
        .map_err(|_| ContactsError::contact_not_found(raw))
}

pub async fn list_contacts(State(state): State<AppState>) -> ContactsResult<Json<Vec<Contact>>> {
    let contacts = state.with_conn(contact_ops::list_contacts)?;
    Ok(Json(contacts))
}

pub async fn create_contact(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewContact>,
) -> ContactsResult<(StatusCode, Json<Contact>)> {
    let contact = state.with_conn(|conn| contact_ops::create_contact(conn, &new))?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ContactsResult<Json<Contact>> {
    let id = parse_id(&raw_id)?;
    let contact = state.with_conn(|conn| contact_ops::get_contact(conn, id))?;
    Ok(Json(contact))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ApiJson(update): ApiJson<ContactUpdate>,
) -> ContactsResult<Json<Contact>> {
    let id = parse_id(&raw_id)?;
    let contact = state.with_conn(|conn| contact_ops::update_contact(conn, id, &update))?;
    Ok(Json(contact))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ContactsResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.with_conn(|conn| contact_ops::delete_contact(conn, id))?;
    Ok(StatusCode::NO_CONTENT)
}
