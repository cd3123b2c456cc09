use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::users::repo_types::User;

/// Request body for user creation. `email` may be absent or null.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Parse a raw body; anything but an object with a non-empty string
    /// `email` yields `None`.
    pub fn email_from_body(body: &[u8]) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value::<CreateUserRequest>(value)
            .ok()?
            .email
            .filter(|email| !email.is_empty())
    }
}

/// User as returned to the client.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            created_at: u.created_at,
        }
    }
}
