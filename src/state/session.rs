//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page reads this to choose between the form and the greeting,
//! and drives the two transitions after a login attempt or a logout click.
//!
//! INVARIANTS
//! ==========
//! `is_authenticated` is true exactly when both `user` and `token` are set.
//! Fields are private so only the transitions can change them, and each
//! transition writes all three together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use leptos::prelude::*;

/// Authentication state: either anonymous or signed in with a token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<String>,
    token: Option<String>,
    is_authenticated: bool,
}

impl SessionState {
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Record a successful login. Valid from either state; last write wins.
    pub fn login_success(&mut self, user: String, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
    }

    /// Return to the anonymous state. Idempotent.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }
}

/// Holder of a [`SessionState`] that publishes transitions to observers.
pub trait SessionStore {
    /// Current state without subscribing.
    fn snapshot(&self) -> SessionState;

    fn login_success(&self, user: String, token: String);

    fn logout(&self);
}

impl SessionStore for RwSignal<SessionState> {
    fn snapshot(&self) -> SessionState {
        self.get_untracked()
    }

    fn login_success(&self, user: String, token: String) {
        self.update(|state| state.login_success(user, token));
    }

    fn logout(&self) {
        self.update(SessionState::logout);
    }
}

/// Plain in-memory store for callers outside a reactive owner.
impl SessionStore for RefCell<SessionState> {
    fn snapshot(&self) -> SessionState {
        self.borrow().clone()
    }

    fn login_success(&self, user: String, token: String) {
        self.borrow_mut().login_success(user, token);
    }

    fn logout(&self) {
        self.borrow_mut().logout();
    }
}
