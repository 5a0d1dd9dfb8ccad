//! REST API helpers for the login endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Other builds: the call returns a transport error since the endpoint is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`ApiError`]; callers decide what the user sees. No
//! timeout or retry is applied here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;

/// Error returned by [`AuthApi::login`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("login request failed: {0}")]
    Transport(String),
    /// The endpoint answered with a non-2xx status.
    #[error("Login failed: {0}")]
    Status(u16),
    /// The response body was not `{"token": string}`.
    #[error("invalid login response: {0}")]
    InvalidResponse(String),
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `POST /login` response. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Something that can exchange credentials for a token.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// unreadable body.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
}

/// [`AuthApi`] backed by the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.login_url())
                .json(credentials)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let raw = resp
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            parse_login_response(&raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, credentials);
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn parse_login_response(raw: &str) -> Result<LoginResponse, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
