use thiserror::Error;

/// Errors reported by [`crate::store::LeagueStore`] operations.
///
/// Every variant is recoverable. Apart from [`LeagueError::Storage`], a
/// failed operation leaves the in-memory league untouched.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{kind} already exists: {name}")]
    AlreadyExists { kind: &'static str, name: String },

    #[error("game index {index} out of range (division has {len} games)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("season not found: {0}")]
    UnknownSeason(String),

    #[error("division not found: {0}")]
    UnknownDivision(String),

    #[error("admin access required")]
    Unauthorized,

    #[error("storage error: {0:#}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for LeagueError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err)
    }
}

impl From<serde_json::Error> for LeagueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.into())
    }
}

pub type Result<T, E = LeagueError> = std::result::Result<T, E>;
