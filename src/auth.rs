//! Admin capability.
//!
//! A single shared credential pair is checked once; the result is an
//! [`AdminSession`] that callers pass to every mutating store operation.

use crate::error::LeagueError;

/// The shared admin username and password.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Check a login attempt and produce the session it grants.
    pub fn login(&self, username: &str, password: &str) -> AdminSession {
        if self.verify(username, password) {
            tracing::info!("Admin login for {}", username);
            AdminSession::admin()
        } else {
            tracing::warn!("Rejected admin login for {}", username);
            AdminSession::guest()
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Whether the current caller may mutate the league.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminSession {
    is_admin: bool,
}

impl AdminSession {
    pub fn admin() -> Self {
        Self { is_admin: true }
    }

    /// A read-only session.
    pub fn guest() -> Self {
        Self { is_admin: false }
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn require_admin(&self) -> Result<(), LeagueError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(LeagueError::Unauthorized)
        }
    }
}
