//! localStorage access for the persisted session.
//!
//! The session survives page reloads through two keys: `token` (the bearer
//! credential) and `user` (the JSON-serialized user record). All access is
//! gated on a browser environment and never panics; a missing or unreadable
//! value reads back as `None`.

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

/// Read the persisted bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read and parse the persisted user record, if any.
pub fn read_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(USER_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both session halves. The pair is written together so a reload
/// never observes a token without its user record.
pub fn write_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Erase both persisted session halves. Safe to call when nothing is stored.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
