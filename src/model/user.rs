use serde::{Deserialize, Serialize};

use super::de::null_as_default;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_creator: bool,
}

impl User {
    /// Name shown in headers: full name when set, username otherwise.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// What a read of the session store yields. Either half may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// Returns the user and token only when both are present.
    pub fn into_active(self) -> Option<(User, String)> {
        match (self.user, self.token) {
            (Some(user), Some(token)) => Some((user, token)),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}
