//! The league store: canonical seasons, teams and news, persisted per key.
//!
//! Mutations persist before they are committed in memory. Each operation
//! builds the updated document, saves it, and only then swaps it in, so a
//! [`LeagueError::Storage`] failure leaves the in-memory league unchanged.

mod normalize;

pub use normalize::normalize;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::AdminSession;
use crate::config::LeagueDefaults;
use crate::db::{KeyValueStore, NEWS_KEY, SCOREBOARD_KEY, TEAMS_KEY};
use crate::error::{LeagueError, Result};
use crate::models::{empty_season, Game, League, NewsFeed, Season, TeamRecord, TeamRegistry};
use crate::standings;

pub struct LeagueStore<S> {
    storage: S,
    defaults: LeagueDefaults,
    league: League,
    teams: TeamRegistry,
    news: NewsFeed,
    load_warnings: Vec<LeagueError>,
}

impl<S: KeyValueStore> LeagueStore<S> {
    /// Load all three documents and normalize them.
    ///
    /// A missing key starts from its empty default. A key that cannot be read
    /// or does not have the expected shape is logged, recorded in
    /// [`LeagueStore::load_warnings`], and also replaced by its default.
    pub fn load(storage: S, defaults: LeagueDefaults) -> Self {
        let mut load_warnings = Vec::new();
        let mut league: League = load_or_default(&storage, SCOREBOARD_KEY, &mut load_warnings);
        let mut teams: TeamRegistry = load_or_default(&storage, TEAMS_KEY, &mut load_warnings);
        let news: NewsFeed = load_or_default(&storage, NEWS_KEY, &mut load_warnings);

        normalize(&mut league, &mut teams, &defaults);

        tracing::info!(
            "Loaded {} seasons, {} news items",
            league.len(),
            news.len()
        );

        Self {
            storage,
            defaults,
            league,
            teams,
            news,
            load_warnings,
        }
    }

    // ============================================================
    // Reads
    // ============================================================

    pub fn defaults(&self) -> &LeagueDefaults {
        &self.defaults
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn team_registry(&self) -> &TeamRegistry {
        &self.teams
    }

    /// Storage failures hit while loading; each was replaced by a default.
    pub fn load_warnings(&self) -> &[LeagueError] {
        &self.load_warnings
    }

    pub fn season_names(&self) -> Vec<&str> {
        self.league.season_names().collect()
    }

    pub fn division_names(&self, season: &str) -> Result<Vec<&str>> {
        Ok(self.season(season)?.keys().collect())
    }

    /// The division's games in entry order. Positions here are the edit indices.
    pub fn games(&self, season: &str, division: &str) -> Result<&[Game]> {
        self.season(season)?
            .get(division)
            .map(Vec::as_slice)
            .ok_or_else(|| LeagueError::UnknownDivision(division.to_string()))
    }

    pub fn standings(&self, season: &str, division: &str) -> Result<Vec<TeamRecord>> {
        Ok(standings::compute(self.games(season, division)?))
    }

    pub fn teams(&self, division: &str) -> Result<&[String]> {
        self.teams
            .teams(division)
            .ok_or_else(|| LeagueError::UnknownDivision(division.to_string()))
    }

    /// News in posting order.
    pub fn news(&self) -> &[String] {
        &self.news
    }

    pub fn news_latest_first(&self) -> impl Iterator<Item = &str> {
        self.news.iter().rev().map(String::as_str)
    }

    // ============================================================
    // Admin mutations
    // ============================================================

    pub fn add_season(&mut self, session: &AdminSession, name: &str) -> Result<()> {
        session.require_admin()?;
        let name = non_empty(name, "season name")?;
        if self.league.contains_season(name) {
            return Err(LeagueError::AlreadyExists {
                kind: "season",
                name: name.to_string(),
            });
        }

        let mut league = self.league.clone();
        league.insert_season(name, empty_season(&self.defaults.divisions));
        self.persist(SCOREBOARD_KEY, &league)?;
        self.league = league;

        tracing::info!("Added season {}", name);
        Ok(())
    }

    pub fn add_team(&mut self, session: &AdminSession, division: &str, name: &str) -> Result<()> {
        session.require_admin()?;
        let name = non_empty(name, "team name")?;
        let existing = self.teams(division)?;
        if existing.iter().any(|team| team == name) {
            return Err(LeagueError::AlreadyExists {
                kind: "team",
                name: name.to_string(),
            });
        }

        let mut teams = self.teams.clone();
        if let Some(list) = teams.teams_mut(division) {
            list.push(name.to_string());
        }
        self.persist(TEAMS_KEY, &teams)?;
        self.teams = teams;

        tracing::info!("Added team {} to {}", name, division);
        Ok(())
    }

    pub fn add_game(
        &mut self,
        session: &AdminSession,
        season: &str,
        division: &str,
        game: Game,
    ) -> Result<usize> {
        session.require_admin()?;
        let mut league = self.league.clone();
        let games = division_games_mut(&mut league, season, division)?;
        games.push(game);
        let index = games.len() - 1;

        self.persist(SCOREBOARD_KEY, &league)?;
        self.league = league;

        tracing::info!("Added game #{} to {} / {}", index, season, division);
        Ok(index)
    }

    /// Replace the game at `index`, keeping its position.
    pub fn update_game(
        &mut self,
        session: &AdminSession,
        season: &str,
        division: &str,
        index: usize,
        game: Game,
    ) -> Result<()> {
        session.require_admin()?;
        let mut league = self.league.clone();
        let games = division_games_mut(&mut league, season, division)?;
        let len = games.len();
        let slot = games
            .get_mut(index)
            .ok_or(LeagueError::IndexOutOfRange { index, len })?;
        *slot = game;

        self.persist(SCOREBOARD_KEY, &league)?;
        self.league = league;

        tracing::info!("Updated game #{} in {} / {}", index, season, division);
        Ok(())
    }

    pub fn post_news(&mut self, session: &AdminSession, text: &str) -> Result<()> {
        session.require_admin()?;
        let text = non_empty(text, "news text")?;

        let mut news = self.news.clone();
        news.push(text.to_string());
        self.persist(NEWS_KEY, &news)?;
        self.news = news;

        tracing::info!("Posted news item #{}", self.news.len());
        Ok(())
    }

    fn season(&self, season: &str) -> Result<&Season> {
        self.league
            .season(season)
            .ok_or_else(|| LeagueError::UnknownSeason(season.to_string()))
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.storage.save(key, &value).map_err(|e| {
            tracing::error!("Failed to persist {}: {:#}", key, e);
            LeagueError::Storage(e)
        })
    }
}

fn division_games_mut<'a>(
    league: &'a mut League,
    season: &str,
    division: &str,
) -> Result<&'a mut Vec<Game>> {
    league
        .season_mut(season)
        .ok_or_else(|| LeagueError::UnknownSeason(season.to_string()))?
        .get_mut(division)
        .ok_or_else(|| LeagueError::UnknownDivision(division.to_string()))
}

fn non_empty<'a>(text: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(LeagueError::Empty { field })
    } else {
        Ok(trimmed)
    }
}

fn load_or_default<T: DeserializeOwned + Default>(
    storage: &impl KeyValueStore,
    key: &str,
    warnings: &mut Vec<LeagueError>,
) -> T {
    let decoded: anyhow::Result<T> = storage.load(key).and_then(|value| match value {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(T::default()),
    });

    decoded.unwrap_or_else(|e| {
        tracing::warn!("Could not load {}, using defaults: {:#}", key, e);
        warnings.push(LeagueError::Storage(e.context(format!("loading {key}"))));
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::GameStatus;
    use serde_json::{json, Value};
    use std::cell::Cell;

    /// Storage whose writes can be switched off.
    struct FlakyStore {
        inner: Database,
        fail_writes: Cell<bool>,
    }

    impl KeyValueStore for FlakyStore {
        fn load(&self, key: &str) -> anyhow::Result<Option<Value>> {
            self.inner.load(key)
        }

        fn save(&self, key: &str, value: &Value) -> anyhow::Result<()> {
            if self.fail_writes.get() {
                anyhow::bail!("disk full");
            }
            self.inner.save(key, value)
        }
    }

    fn database() -> Database {
        let db = Database::open_memory().unwrap();
        db.migrate().unwrap();
        db
    }

    fn flaky_store() -> LeagueStore<FlakyStore> {
        LeagueStore::load(
            FlakyStore {
                inner: database(),
                fail_writes: Cell::new(false),
            },
            LeagueDefaults::default(),
        )
    }

    #[test]
    fn failed_save_leaves_memory_untouched() {
        let admin = AdminSession::admin();
        let mut store = flaky_store();
        store
            .add_game(&admin, "2025 Spring", "Division A", Game::new("A", "B", 1, 0, GameStatus::Final))
            .unwrap();
        store.storage.fail_writes.set(true);

        let err = store
            .add_game(&admin, "2025 Spring", "Division A", Game::new("C", "D", 1, 0, GameStatus::Final))
            .unwrap_err();
        assert!(matches!(err, LeagueError::Storage(_)));
        assert!(matches!(
            store.add_season(&admin, "2026"),
            Err(LeagueError::Storage(_))
        ));
        assert!(matches!(
            store.post_news(&admin, "hello"),
            Err(LeagueError::Storage(_))
        ));

        assert_eq!(store.games("2025 Spring", "Division A").unwrap().len(), 1);
        assert_eq!(store.season_names(), vec!["2025 Spring"]);
        assert!(store.news().is_empty());
    }

    #[test]
    fn malformed_documents_fall_back_to_defaults() {
        let db = database();
        db.save_raw(SCOREBOARD_KEY, "{broken").unwrap();
        db.save(TEAMS_KEY, &json!(["not", "a", "map"])).unwrap();
        db.save(NEWS_KEY, &json!(["kept"])).unwrap();

        let store = LeagueStore::load(db, LeagueDefaults::default());

        assert_eq!(store.load_warnings().len(), 2);
        assert!(store
            .load_warnings()
            .iter()
            .all(|w| matches!(w, LeagueError::Storage(_))));
        assert_eq!(store.season_names(), vec!["2025 Spring"]);
        assert_eq!(store.teams("Division A").unwrap().len(), 0);
        assert_eq!(store.news(), ["kept"]);
    }

    #[test]
    fn empty_check_runs_on_trimmed_text() {
        assert_eq!(non_empty("  Eagles \n", "team name").unwrap(), "Eagles");
        assert!(matches!(
            non_empty(" \t ", "team name"),
            Err(LeagueError::Empty { field: "team name" })
        ));
    }
}
