//! API endpoint configuration resolved at build time.
//!
//! The base URL comes from the `API_BASE_URL` environment variable seen by
//! the compiler, so a WASM bundle carries its endpoint without a runtime
//! config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Where the login endpoint lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL, dropping trailing slashes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Build from `API_BASE_URL` at compile time, or [`DEFAULT_API_BASE_URL`].
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("API_BASE_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    /// Full URL of `POST /login`.
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
