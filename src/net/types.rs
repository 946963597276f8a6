//! Wire schema shared with the media server's REST API.

use serde::{Deserialize, Serialize};

/// Credentials posted to `/api/v1/auth/login` and `/api/v1/auth/register`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Registration only; first-run servers accept `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_token: Option<String>,
}

/// Successful login response.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// A media library as listed by `/api/v1/library`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Library {
    pub id: i64,
    pub name: String,
    pub media_type: String,
}
