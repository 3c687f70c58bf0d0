use serde::{Deserialize, Serialize};

use super::Game;

/// Input for creating a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSeasonInput {
    pub name: String,
}

/// Input for adding a team to a division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamInput {
    pub name: String,
}

/// Input for posting a news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostNewsInput {
    pub text: String,
}

/// Admin credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// A game together with the position used to edit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedGame {
    pub index: usize,
    #[serde(flatten)]
    pub game: Game,
}
