//! Display-only decoding of the login token payload.
//!
//! The token is treated as a JWT-shaped string (`header.payload.signature`)
//! and only its payload segment is read. The signature is never checked, so
//! nothing decoded here may gate access to anything; it is for labels and
//! logs only.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// base64url that accepts payloads with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Error returned by [`TokenClaims::decode`].
#[derive(Debug, thiserror::Error)]
pub enum TokenDecodeError {
    /// The token has no second `.`-separated segment.
    #[error("token has no payload segment")]
    MissingPayload,
    /// The payload segment is not valid base64url.
    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload bytes are not JSON.
    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims read from the token payload. Every field is optional and no claim
/// type is enforced: standard claims keep whatever JSON the issuer sent, and
/// name claims that are not strings read as absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "firstName", default, deserialize_with = "string_or_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, deserialize_with = "string_or_none")]
    pub last_name: Option<String>,
    pub iss: Option<Value>,
    pub sub: Option<Value>,
    /// A string or an array of strings.
    pub aud: Option<Value>,
    pub exp: Option<Value>,
    pub nbf: Option<Value>,
    pub iat: Option<Value>,
    pub jti: Option<Value>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl TokenClaims {
    /// Decode the payload of `token` without verifying its signature.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenDecodeError`] when the token has no payload segment
    /// or the segment is not base64url-encoded JSON. A JSON payload that is
    /// not an object yields empty claims.
    pub fn decode(token: &str) -> Result<Self, TokenDecodeError> {
        let payload = token.split('.').nth(1).ok_or(TokenDecodeError::MissingPayload)?;
        let bytes = PAYLOAD_ENGINE.decode(payload)?;
        match serde_json::from_slice::<Value>(&bytes)? {
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Ok(Self::default()),
        }
    }

    /// `"First Last"` from whichever name parts are present and non-blank.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() { None } else { Some(parts.join(" ")) }
    }
}
