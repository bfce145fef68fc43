//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the bank API's JSON bodies so serde round-trips stay
//! lossless. Timestamps are kept as the server's RFC 3339 strings; the client
//! displays them but never does arithmetic on them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Account role assigned by the bank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer; may only manage their own profile.
    #[default]
    Depositor,
    /// Bank employee; may manage any user's profile.
    Banker,
}

impl Role {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Depositor => "Depositor",
            Self::Banker => "Banker",
        }
    }
}

/// A bank user as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login name.
    pub username: String,
    #[serde(default)]
    pub role: Role,
    pub full_name: String,
    pub email: String,
    /// Last password change (RFC 3339).
    pub password_changed_at: String,
    /// Account creation time (RFC 3339).
    pub created_at: String,
    /// The server sends `null` when the flag was never set.
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub is_email_verified: bool,
}

fn deserialize_null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body returned by `POST /users/login`.
///
/// Expiry timestamps are carried through untouched; nothing in the client
/// schedules refreshes from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUserResponse {
    pub session_id: String,
    pub access_token: String,
    pub access_token_expires_at: String,
    pub refresh_token: String,
    pub refresh_token_expires_at: String,
    pub user: User,
}
