use std::sync::{MutexGuard, PoisonError};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::{AdminAuth, AppState};
use crate::db::Database;
use crate::error::LeagueError;
use crate::models::*;
use crate::standings;
use crate::store::LeagueStore;

type ApiResult<T> = Result<T, (StatusCode, String)>;

// ============================================================
// Error Handling
// ============================================================

/// Map a store error to a response.
///
/// Validation and lookup failures are returned to the client as-is. Storage
/// failures are logged in full and the client only sees a generic message.
fn league_error(e: LeagueError) -> (StatusCode, String) {
    let status = match &e {
        LeagueError::Empty { .. } => StatusCode::BAD_REQUEST,
        LeagueError::AlreadyExists { .. } => StatusCode::CONFLICT,
        LeagueError::IndexOutOfRange { .. }
        | LeagueError::UnknownSeason(_)
        | LeagueError::UnknownDivision(_) => StatusCode::NOT_FOUND,
        LeagueError::Unauthorized => StatusCode::UNAUTHORIZED,
        LeagueError::Storage(_) => {
            tracing::error!("Internal error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            );
        }
    };

    tracing::warn!("Request rejected: {}", e);
    (status, e.to_string())
}

/// Lock the store, recovering from poisoning. Mutations only ever swap in
/// already-saved state, so a panicked request leaves nothing half-applied.
fn lock(state: &AppState) -> MutexGuard<'_, LeagueStore<Database>> {
    state.store.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================
// Health & session
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> ApiResult<Json<serde_json::Value>> {
    let session = state.credentials.login(&input.username, &input.password);
    if session.is_admin() {
        Ok(Json(json!({ "is_admin": true })))
    } else {
        Err((StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()))
    }
}

pub async fn defaults(State(state): State<AppState>) -> Json<serde_json::Value> {
    let store = lock(&state);
    let defaults = store.defaults();
    Json(json!({
        "season": defaults.season,
        "divisions": defaults.divisions,
        "statuses": GameStatus::ALL.map(|s| s.as_str()),
    }))
}

// ============================================================
// Seasons
// ============================================================

pub async fn list_seasons(State(state): State<AppState>) -> Json<Vec<String>> {
    let store = lock(&state);
    Json(store.season_names().into_iter().map(String::from).collect())
}

pub async fn create_season(
    State(state): State<AppState>,
    AdminAuth(session): AdminAuth,
    Json(input): Json<CreateSeasonInput>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let mut store = lock(&state);
    store
        .add_season(&session, &input.name)
        .map_err(league_error)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "name": input.name.trim() })),
    ))
}

pub async fn list_divisions(
    State(state): State<AppState>,
    Path(season): Path<String>,
) -> ApiResult<Json<Vec<String>>> {
    let store = lock(&state);
    store
        .division_names(&season)
        .map(|names| Json(names.into_iter().map(String::from).collect()))
        .map_err(league_error)
}

// ============================================================
// Games & standings
// ============================================================

pub async fn list_games(
    State(state): State<AppState>,
    Path((season, division)): Path<(String, String)>,
) -> ApiResult<Json<Vec<IndexedGame>>> {
    let store = lock(&state);
    let games = store.games(&season, &division).map_err(league_error)?;
    Ok(Json(
        games
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, game)| IndexedGame { index, game })
            .collect(),
    ))
}

pub async fn add_game(
    State(state): State<AppState>,
    AdminAuth(session): AdminAuth,
    Path((season, division)): Path<(String, String)>,
    Json(game): Json<Game>,
) -> ApiResult<(StatusCode, Json<IndexedGame>)> {
    let mut store = lock(&state);
    let index = store
        .add_game(&session, &season, &division, game.clone())
        .map_err(league_error)?;
    Ok((StatusCode::CREATED, Json(IndexedGame { index, game })))
}

pub async fn update_game(
    State(state): State<AppState>,
    AdminAuth(session): AdminAuth,
    Path((season, division, index)): Path<(String, String, usize)>,
    Json(game): Json<Game>,
) -> ApiResult<Json<IndexedGame>> {
    let mut store = lock(&state);
    store
        .update_game(&session, &season, &division, index, game.clone())
        .map_err(league_error)?;
    Ok(Json(IndexedGame { index, game }))
}

pub async fn get_standings(
    State(state): State<AppState>,
    Path((season, division)): Path<(String, String)>,
) -> ApiResult<Json<Vec<StandingsRow>>> {
    let store = lock(&state);
    store
        .standings(&season, &division)
        .map(|records| Json(standings::rank(records)))
        .map_err(league_error)
}

// ============================================================
// Teams
// ============================================================

pub async fn list_team_registry(State(state): State<AppState>) -> Json<TeamRegistry> {
    let store = lock(&state);
    Json(store.team_registry().clone())
}

pub async fn list_teams(
    State(state): State<AppState>,
    Path(division): Path<String>,
) -> ApiResult<Json<Vec<String>>> {
    let store = lock(&state);
    store
        .teams(&division)
        .map(|teams| Json(teams.to_vec()))
        .map_err(league_error)
}

pub async fn add_team(
    State(state): State<AppState>,
    AdminAuth(session): AdminAuth,
    Path(division): Path<String>,
    Json(input): Json<CreateTeamInput>,
) -> ApiResult<(StatusCode, Json<Vec<String>>)> {
    let mut store = lock(&state);
    store
        .add_team(&session, &division, &input.name)
        .map_err(league_error)?;
    let teams = store.teams(&division).map_err(league_error)?.to_vec();
    Ok((StatusCode::CREATED, Json(teams)))
}

// ============================================================
// News
// ============================================================

pub async fn list_news(State(state): State<AppState>) -> Json<Vec<String>> {
    let store = lock(&state);
    Json(store.news_latest_first().map(String::from).collect())
}

pub async fn post_news(
    State(state): State<AppState>,
    AdminAuth(session): AdminAuth,
    Json(input): Json<PostNewsInput>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let mut store = lock(&state);
    store
        .post_news(&session, &input.text)
        .map_err(league_error)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "text": input.text.trim() })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AdminCredentials;
    use crate::config::LeagueDefaults;

    #[test]
    fn lock_survives_a_panicked_request() {
        let db = Database::open_memory().unwrap();
        db.migrate().unwrap();
        let state = AppState::new(
            LeagueStore::load(db, LeagueDefaults::default()),
            AdminCredentials::new("admin", "secret"),
        );

        let poisoner = state.clone();
        let result = std::thread::spawn(move || {
            let _guard = poisoner.store.lock().unwrap();
            panic!("handler failed while holding the store");
        })
        .join();
        assert!(result.is_err());
        assert!(state.store.is_poisoned());

        assert_eq!(lock(&state).season_names(), vec!["2025 Spring"]);
    }
}
