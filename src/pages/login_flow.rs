//! Login and logout orchestration extracted from `login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page builds a [`LoginForm`] from its inputs and hands it here together
//! with the API, the token storage, and the session store it got from
//! context. Tests drive the same functions with in-memory fakes.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures keep their specific message. Everything after
//! validation collapses to [`GENERIC_ERROR_MESSAGE`] for the user while the
//! detail goes to the console. No failure touches the session.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::token::{TokenClaims, TokenDecodeError};
use crate::pages::login::{LoginForm, ValidationError};
use crate::state::session::SessionStore;
use crate::util::storage::{KeyValueStore, TOKEN_STORAGE_KEY};

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// Any reason a login attempt did not reach `login_success`.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("login token unreadable: {0}")]
    Token(#[from] TokenDecodeError),
}

impl LoginError {
    /// Text shown under the form for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Api(_) | Self::Token(_) => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Validate `form`, exchange its credentials for a token, persist the token,
/// and mark the session authenticated as the form's email.
///
/// `form.error_message` is left holding what the user should see: cleared
/// on success, the validation text or [`GENERIC_ERROR_MESSAGE`] on failure.
///
/// # Errors
///
/// Returns a [`LoginError`] for invalid input, a failed request, or an
/// undecodable token. The session and storage are unchanged in every case.
pub async fn handle_login<A, K, S>(api: &A, storage: &K, session: &S, form: &mut LoginForm) -> Result<(), LoginError>
where
    A: AuthApi,
    K: KeyValueStore + ?Sized,
    S: SessionStore + ?Sized,
{
    form.validate()?;

    match exchange_credentials(api, storage, session, form).await {
        Ok(()) => Ok(()),
        Err(e) => {
            leptos::logging::warn!("login failed for {}: {e}", form.email);
            form.error_message = e.user_message();
            Err(e)
        }
    }
}

async fn exchange_credentials<A, K, S>(api: &A, storage: &K, session: &S, form: &LoginForm) -> Result<(), LoginError>
where
    A: AuthApi,
    K: KeyValueStore + ?Sized,
    S: SessionStore + ?Sized,
{
    let credentials = form.credentials();
    let response = api.login(&credentials).await?;

    // Display-only: the signature is not checked.
    let claims = TokenClaims::decode(&response.token)?;
    match claims.display_name() {
        Some(name) => leptos::logging::log!("signed in as {} ({name})", credentials.email),
        None => leptos::logging::log!("signed in as {}", credentials.email),
    }

    storage.set(TOKEN_STORAGE_KEY, &response.token);
    session.login_success(credentials.email, response.token);
    Ok(())
}

/// End the session and drop the persisted token.
pub fn handle_logout<K, S>(session: &S, storage: &K)
where
    K: KeyValueStore + ?Sized,
    S: SessionStore + ?Sized,
{
    session.logout();
    storage.remove(TOKEN_STORAGE_KEY);
}
