use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single game within a division.
///
/// Games carry no id of their own: they are addressed by their position in
/// the division's game list, so that list is never reordered.
///
/// The stored shape uses the capitalised keys of the scoreboard file
/// (`Home`, `Away`, `HomeScore`, `AwayScore`, `Status`). Records written
/// before `Status` existed deserialize as [`GameStatus::Upcoming`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "Home")]
    pub home: String,
    #[serde(rename = "Away")]
    pub away: String,
    /// Scores are taken as entered; there is no range check.
    #[serde(rename = "HomeScore")]
    pub home_score: i64,
    #[serde(rename = "AwayScore")]
    pub away_score: i64,
    #[serde(rename = "Status", default)]
    pub status: GameStatus,
}

impl Game {
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        home_score: i64,
        away_score: i64,
        status: GameStatus,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_score,
            away_score,
            status,
        }
    }
}

/// Where a game stands. Only [`GameStatus::Final`] games count toward wins and losses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Upcoming,
    Live,
    Final,
}

impl GameStatus {
    /// Every valid status, in lifecycle order.
    pub const ALL: [GameStatus; 3] = [Self::Upcoming, Self::Live, Self::Final];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Live => "Live",
            Self::Final => "Final",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown game status: {s}"))
    }
}
