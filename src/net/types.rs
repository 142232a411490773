//! Shared REST DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Profile fields are
//! optional because the login response may carry only a partial user, and a
//! user that has not completed the profile page has none of them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by login, registration, or profile update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user identifier. Numeric ids are kept as text; a missing or
    /// `null` id does not reject the rest of the user.
    #[serde(default, deserialize_with = "deserialize_optional_string_from_scalar")]
    pub id: Option<String>,
    /// Role discriminator (`"ADMIN"` or anything else). Navigation-only.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// ISO 8601 date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date_of_joining: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `PUT /api/auth/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_joining: String,
}

impl ProfileUpdate {
    /// Prefill the profile form from whatever the session already knows.
    pub fn from_user(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::default();
        };
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            date_of_joining: user.date_of_joining.clone().unwrap_or_default(),
        }
    }
}

/// Parse a login/registration response body into an optional profile.
///
/// The backend may answer with a user object, a plain message, or nothing;
/// only a well-formed user object yields `Some`.
pub fn parse_auth_response(body: &str) -> Option<User> {
    serde_json::from_str::<User>(body).ok()
}

fn deserialize_optional_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
