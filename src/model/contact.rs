use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::Id;

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: Id<Contact>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: Option<String>,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn create(name: String, phone: String) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            name,
            phone,
            email: None,
            contact_type: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of a create request. Name and phone are optional here so that a
/// missing field reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: Option<String>,
}

/// Body of an update request.
///
/// The outer `Option` says whether the key was sent at all, the inner one
/// whether it was `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactUpdate {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,
    #[serde(default, rename = "type", deserialize_with = "present")]
    pub contact_type: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
