//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use crate::auth::AdminCredentials;
use crate::models::GameStatus;

/// Season created on first load when the scoreboard has none by that name.
pub const DEFAULT_SEASON: &str = "2025 Spring";

/// Divisions every season and the team registry always carry.
pub const DEFAULT_DIVISIONS: [&str; 2] = ["Division A", "Division B"];

/// Valid game statuses, in lifecycle order.
pub const GAME_STATUSES: [GameStatus; 3] = GameStatus::ALL;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// The structural defaults the store normalizes against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueDefaults {
    pub season: String,
    /// Ordered; back-filled divisions are appended in this order.
    pub divisions: Vec<String>,
}

impl Default for LeagueDefaults {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON.to_string(),
            divisions: DEFAULT_DIVISIONS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file (from SCOREKEEPER_DB_PATH). `None` uses the platform data dir.
    pub db_path: Option<PathBuf>,
    /// Admin credential pair (from SCOREKEEPER_ADMIN_USER / SCOREKEEPER_ADMIN_PASSWORD)
    pub admin: AdminCredentials,
    /// League defaults (from SCOREKEEPER_DEFAULT_SEASON / SCOREKEEPER_DIVISIONS)
    pub defaults: LeagueDefaults,
}

impl Config {
    /// Load configuration from environment variables, falling back to the built-in defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup("SCOREKEEPER_DB_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let username = lookup("SCOREKEEPER_ADMIN_USER");
        let password = lookup("SCOREKEEPER_ADMIN_PASSWORD");
        if username.is_none() || password.is_none() {
            tracing::warn!("Admin credentials not fully configured, using built-in defaults");
        }
        let admin = AdminCredentials::new(
            username.unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            password.unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
        );

        let mut defaults = LeagueDefaults::default();
        if let Some(season) = lookup("SCOREKEEPER_DEFAULT_SEASON") {
            let season = season.trim();
            if !season.is_empty() {
                defaults.season = season.to_string();
            }
        }
        if let Some(divisions) = lookup("SCOREKEEPER_DIVISIONS") {
            let divisions: Vec<String> = divisions
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !divisions.is_empty() {
                defaults.divisions = divisions;
            }
        }

        Self {
            db_path,
            admin,
            defaults,
        }
    }
}
