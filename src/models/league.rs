use serde::{Deserialize, Serialize};

use super::{Game, OrderedMap};

/// Division name to that division's games, in the order they were entered.
pub type Season = OrderedMap<Vec<Game>>;

/// News items in posting order. Readers show them newest first.
pub type NewsFeed = Vec<String>;

/// A season with every listed division present and no games.
pub fn empty_season<S: AsRef<str>>(divisions: &[S]) -> Season {
    divisions
        .iter()
        .map(|division| (division.as_ref(), Vec::new()))
        .collect()
}

/// Every season, keyed by name. Stored under the `scoreboard` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct League {
    seasons: OrderedMap<Season>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn season(&self, name: &str) -> Option<&Season> {
        self.seasons.get(name)
    }

    pub fn season_mut(&mut self, name: &str) -> Option<&mut Season> {
        self.seasons.get_mut(name)
    }

    pub fn contains_season(&self, name: &str) -> bool {
        self.seasons.contains_key(name)
    }

    pub fn insert_season(&mut self, name: impl Into<String>, season: Season) {
        self.seasons.insert(name, season);
    }

    pub fn season_names(&self) -> impl Iterator<Item = &str> {
        self.seasons.keys()
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    pub(crate) fn seasons_mut(&mut self) -> impl Iterator<Item = &mut Season> {
        self.seasons.values_mut()
    }

    pub(crate) fn get_or_insert_season(
        &mut self,
        name: &str,
        default: impl FnOnce() -> Season,
    ) -> &mut Season {
        self.seasons.get_or_insert_with(name, default)
    }
}

/// Teams per division. Teams belong to a division across all seasons.
/// Stored under the `teams` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamRegistry {
    divisions: OrderedMap<Vec<String>>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teams(&self, division: &str) -> Option<&[String]> {
        self.divisions.get(division).map(Vec::as_slice)
    }

    /// Divisions with their teams, in registry order.
    pub fn divisions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.divisions
            .iter()
            .map(|(division, teams)| (division, teams.as_slice()))
    }

    pub(crate) fn teams_mut(&mut self, division: &str) -> Option<&mut Vec<String>> {
        self.divisions.get_mut(division)
    }

    pub(crate) fn ensure_division(&mut self, division: &str) {
        self.divisions.get_or_insert_with(division, Vec::new);
    }
}
