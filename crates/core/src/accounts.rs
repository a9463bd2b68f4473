//! Session state transitions for the authenticated user.
//!
//! `reduce` is the only way the stored profile changes. Hosts keep the current
//! `User`, feed it together with a `UserAction`, and store whatever comes back.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ActionError;
use crate::model::User;

pub const USER_LOGGED_IN: &str = "USER_LOGGED_IN";
pub const USER_LOGGED_OUT: &str = "USER_LOGGED_OUT";

/// A signal dispatched to the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// Replace the whole profile with the payload.
    LoggedIn(User),
    /// Clear the profile when the payload names the stored user.
    LoggedOut(String),
    /// Any other signal kind; leaves the state alone.
    Other(String),
}

impl UserAction {
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            UserAction::LoggedIn(_) => USER_LOGGED_IN,
            UserAction::LoggedOut(_) => USER_LOGGED_OUT,
            UserAction::Other(kind) => kind,
        }
    }

    /// Decode a `{ type, payload }` pair.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` when a known signal carries a payload of the wrong shape,
    /// or when a logout signal carries no payload.
    pub fn from_parts(kind: &str, payload: Option<Value>) -> Result<Self, ActionError> {
        match kind {
            USER_LOGGED_IN => {
                let user = match payload {
                    None | Some(Value::Null) => User::empty(),
                    Some(value) => serde_json::from_value(value).map_err(|source| {
                        ActionError::InvalidPayload {
                            kind: USER_LOGGED_IN,
                            source,
                        }
                    })?,
                };
                Ok(UserAction::LoggedIn(user))
            }
            USER_LOGGED_OUT => {
                let value = payload.ok_or(ActionError::MissingPayload {
                    kind: USER_LOGGED_OUT,
                })?;
                let username = serde_json::from_value(value).map_err(|source| {
                    ActionError::InvalidPayload {
                        kind: USER_LOGGED_OUT,
                        source,
                    }
                })?;
                Ok(UserAction::LoggedOut(username))
            }
            other => Ok(UserAction::Other(other.to_owned())),
        }
    }
}

/// Apply `action` to `state` and return the next state.
#[must_use]
pub fn reduce(state: &User, action: &UserAction) -> User {
    match action {
        UserAction::LoggedIn(user) => user.clone(),
        UserAction::LoggedOut(username) if state.username() == Some(username.as_str()) => {
            User::empty()
        }
        UserAction::LoggedOut(_) | UserAction::Other(_) => state.clone(),
    }
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

impl<'de> Deserialize<'de> for UserAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAction::deserialize(deserializer)?;
        UserAction::from_parts(&raw.kind, raw.payload).map_err(de::Error::custom)
    }
}

impl Serialize for UserAction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut out = serializer.serialize_struct("UserAction", 2)?;
        out.serialize_field("type", self.kind())?;
        match self {
            UserAction::LoggedIn(user) => out.serialize_field("payload", user)?,
            UserAction::LoggedOut(username) => out.serialize_field("payload", username)?,
            UserAction::Other(_) => out.serialize_field("payload", &Value::Null)?,
        }
        out.end()
    }
}
