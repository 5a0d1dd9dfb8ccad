//! Login page: email + password form, or a greeting once signed in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::{Credentials, HttpAuthApi};
use crate::pages::login_flow::{handle_login, handle_logout};
use crate::state::session::SessionState;
use crate::util::storage::LocalStorage;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Client-side form check failure. A UX guard, not a security boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 6 characters long.")]
    WeakPassword,
}

/// Coarse syntactic check: email must contain `@`, password must have at
/// least [`MIN_PASSWORD_LEN`] UTF-16 code units, the length a browser input
/// reports. Email is checked first.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

/// Input captured for one submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Empty when no error is active.
    pub error_message: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into(), error_message: String::new() }
    }

    /// Validate the fields, setting or clearing `error_message` to match.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] that was written to `error_message`.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        match validate_credentials(&self.email, &self.password) {
            Ok(()) => {
                self.error_message.clear();
                Ok(())
            }
            Err(e) => {
                self.error_message = e.to_string();
                Err(e)
            }
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ApiConfig>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let mut form = LoginForm::new(email.get_untracked(), password.get_untracked());
        if form.validate().is_err() {
            error.set(form.error_message);
            return;
        }
        error.set(String::new());
        pending.set(true);

        let api = HttpAuthApi::new(config.clone());
        leptos::task::spawn_local(async move {
            match handle_login(&api, &LocalStorage, &session, &mut form).await {
                Ok(()) => error.set(String::new()),
                Err(e) => error.set(e.user_message()),
            }
            pending.set(false);
        });
    };

    let on_logout = move |_| handle_logout(&session, &LocalStorage);

    let greeting = move || {
        session.with(|s| format!("Welcome, {}! You are logged in.", s.user().unwrap_or_default()))
    };

    let login_form = move || {
        view! {
            <form class="login-form" novalidate=true on:submit=on_submit.clone()>
                <input
                    class="login-input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || pending.get()>
                    "Login"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-error">{move || error.get()}</p>
                </Show>
            </form>
        }
    };

    view! {
        <div class="login-page">
            <h2>"Login"</h2>
            <Show when=move || session.with(SessionState::is_authenticated) fallback=login_form>
                <div class="login-greeting">
                    <p>{greeting}</p>
                    <button class="login-button" type="button" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}
