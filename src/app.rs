//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ApiConfig;
use crate::pages::login::LoginPage;
use crate::state::session::SessionState;

/// Root application component.
///
/// Creates the session signal in its anonymous state and provides it, with
/// the API config, to every child view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(ApiConfig::from_build_env());

    view! {
        <Title text="Login"/>
        <LoginPage/>
    }
}
