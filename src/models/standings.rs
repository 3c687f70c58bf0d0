use serde::{Deserialize, Serialize};

/// One team's line in a division table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: i64,
    pub points_against: i64,
    /// `points_for - points_against`; the secondary sort key.
    pub diff: i64,
}

impl TeamRecord {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Self::default()
        }
    }

    /// Add one game's points, saturating at the `i64` limits.
    pub fn add_points(&mut self, scored: i64, conceded: i64) {
        self.points_for = self.points_for.saturating_add(scored);
        self.points_against = self.points_against.saturating_add(conceded);
    }
}

/// A [`TeamRecord`] with its 1-based table position, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub rank: usize,
    #[serde(flatten)]
    pub record: TeamRecord,
}
