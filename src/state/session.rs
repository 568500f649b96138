//! Session state: the single source of truth for who is logged in.
//!
//! DESIGN
//! ======
//! The token and user record travel together inside one `Session` value, so
//! no state can ever hold a token without its user or vice versa. Mutations
//! are pure with respect to browser storage; persistence lives in
//! `util::storage` and is driven by the callers (`app`, the API layer), which
//! keeps this type fully testable off the browser.
//!
//! Every login/logout bumps `epoch`. In-flight requests snapshot the epoch
//! when issued and drop their result if it changed by the time they resolve,
//! so a response racing a logout can never write stale data into the UI.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};

/// An authenticated identity: bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// What the route guard sees when it looks at the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    /// Persisted state has not been read yet; render neutrally, decide
    /// nothing (prevents a flash redirect to login on reload).
    Loading,
    Unauthenticated,
    Employee,
    HrAdmin,
}

/// Reactive session holder, provided as an `RwSignal` context at the root.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
    loading: bool,
    epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
            epoch: 0,
        }
    }
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Monotonic counter identifying the current login generation.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether a result issued at `epoch` may still be applied.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Apply the values read from durable storage at startup.
    ///
    /// Only a complete pair counts as authenticated; a lone token or a user
    /// record that failed to parse falls open to the logged-out state.
    pub fn restore(&mut self, token: Option<String>, user: Option<User>) {
        self.session = match (token, user) {
            (Some(token), Some(user)) => Some(Session { token, user }),
            _ => None,
        };
        self.loading = false;
    }

    /// Install a fresh session after a successful login response.
    pub fn login(&mut self, user: User, token: String) {
        self.session = Some(Session { token, user });
        self.loading = false;
        self.epoch += 1;
    }

    /// Drop the session. Idempotent; always invalidates in-flight requests.
    pub fn logout(&mut self) {
        self.session = None;
        self.loading = false;
        self.epoch += 1;
    }

    /// Collapse the session into what the route guard needs.
    pub fn auth_view(&self) -> AuthView {
        if self.loading {
            return AuthView::Loading;
        }
        match self.session.as_ref().map(|s| s.user.role) {
            None => AuthView::Unauthenticated,
            Some(Role::Employee) => AuthView::Employee,
            Some(Role::HrAdmin) => AuthView::HrAdmin,
        }
    }
}
