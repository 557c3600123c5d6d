use anyhow::{Context, Result};

use crate::model::{Session, User};

use super::Storage;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

/// Persists the logged-in identity and token under two independent keys.
pub struct SessionStore {
    storage: Box<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Overwrites any prior session. If either write fails both keys are
    /// removed, so a failed save never pairs a new user with an old token.
    pub fn save(&self, user: &User, token: &str) -> Result<()> {
        let user_json = serde_json::to_string(user).context("serialize session user")?;
        let written = self
            .storage
            .set_item(USER_KEY, &user_json)
            .context("store session user")
            .and_then(|()| {
                self.storage
                    .set_item(TOKEN_KEY, token)
                    .context("store session token")
            });
        if let Err(err) = written {
            if let Err(clear_err) = self.clear() {
                tracing::warn!(error = %format!("{clear_err:#}"), "could not drop partial session");
            }
            return Err(err);
        }
        tracing::debug!(user_id = user.id, "session saved");
        Ok(())
    }

    /// Each half is read on its own; a corrupt user entry reads as `None`.
    pub fn read(&self) -> Result<Session> {
        let user_text = self
            .storage
            .get_item(USER_KEY)
            .context("read session user")?;
        let token = self
            .storage
            .get_item(TOKEN_KEY)
            .context("read session token")?;

        let user = user_text.and_then(|text| match serde_json::from_str::<User>(&text) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "stored session user is unreadable; ignoring it");
                None
            }
        });

        Ok(Session { user, token })
    }

    pub fn clear(&self) -> Result<()> {
        self.storage
            .remove_item(USER_KEY)
            .context("remove session user")?;
        self.storage
            .remove_item(TOKEN_KEY)
            .context("remove session token")?;
        tracing::debug!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/session/store_tests.rs"]
mod tests;
