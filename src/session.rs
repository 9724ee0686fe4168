//! Session Module
//!
//! Read-only view of the signed-in user. Accounts and sign-in are owned by
//! the auth collaborator; this module only reads what it left in storage.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cart::{KeyValueStorage, CURRENT_USER_KEY};

/// Stored user record as written by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// The current session as seen by profile screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
}

impl From<User> for Session {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            display_name: user.name,
            email: user.email,
        }
    }
}

/// Returns the current session, or `None` when nobody is signed in or the
/// stored user cannot be read.
pub fn current_session(storage: &dyn KeyValueStorage) -> Option<Session> {
    let raw = match storage.get(CURRENT_USER_KEY) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!("Failed to read current user: {}", err);
            return None;
        }
    };

    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Some(user.into()),
        Err(err) => {
            warn!("Ignoring unparseable current user: {}", err);
            None
        }
    }
}
