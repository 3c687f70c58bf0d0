//! Admin authentication for API requests.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use base64::Engine as _;

use super::AppState;
use crate::auth::AdminSession;

/// The [`AdminSession`] for the current request.
///
/// Built from HTTP Basic credentials in the `Authorization` header. A missing,
/// malformed or wrong header yields a guest session; the store then refuses
/// any mutation with `Unauthorized`.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth(pub AdminSession);

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok());

        let session = match auth_header.map(parse_basic_auth) {
            Some(Some((username, password))) => state.credentials.login(&username, &password),
            Some(None) => {
                tracing::warn!("Invalid Authorization header format");
                AdminSession::guest()
            }
            None => AdminSession::guest(),
        };

        Ok(Self(session))
    }
}

/// Decode a `Basic <base64(username:password)>` header value.
pub fn parse_basic_auth(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
