use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database lock poisoned")]
    LockPoisoned,

    #[error("{0}")]
    Other(String),
}

pub type ContactsResult<T> = Result<T, ContactsError>;

impl ContactsError {
    pub fn contact_not_found(id: impl ToString) -> Self {
        ContactsError::NotFound {
            entity_type: "Contact".into(),
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ContactsError::MissingRequiredFields
            | ContactsError::BlankField { .. }
            | ContactsError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ContactsError::NotFound { .. } => StatusCode::NOT_FOUND,
            ContactsError::Database(_) | ContactsError::LockPoisoned | ContactsError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message sent back to the client. Server-side details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ContactsError::MissingRequiredFields | ContactsError::BlankField { .. } => {
                MISSING_REQUIRED_FIELDS.to_string()
            }
            ContactsError::NotFound { entity_type, .. } => format!("{} not found", entity_type),
            ContactsError::InvalidJson(_) => "Invalid JSON payload".to_string(),
            ContactsError::Database(_) | ContactsError::LockPoisoned | ContactsError::Other(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for ContactsError {
    fn into_response(self) -> Response {
        let status = self.status();
        match status.as_u16() {
            400..=499 => tracing::warn!(status = status.as_u16(), "Client error: {}", self),
            _ => tracing::error!(status = status.as_u16(), "Server error: {}", self),
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_is_bad_request_with_fixed_message() {
        let err = ContactsError::MissingRequiredFields;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Missing required fields");
    }

    #[test]
    fn blank_field_reports_missing_fields() {
        let err = ContactsError::BlankField {
            field: "phone".into(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), MISSING_REQUIRED_FIELDS);
    }

    #[test]
    fn not_found_is_404() {
        let err = ContactsError::contact_not_found("abc");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Contact not found");
        assert_eq!(err.to_string(), "Contact not found: abc");
    }

    #[test]
    fn database_errors_hide_details() {
        let err = ContactsError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }
}
