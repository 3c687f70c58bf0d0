mod handlers;
mod middleware;

use std::sync::{Arc, Mutex};

use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::AdminCredentials;
use crate::db::Database;
use crate::store::LeagueStore;

pub use middleware::{parse_basic_auth, AdminAuth};

/// Shared state for all handlers.
///
/// The store sits behind a single mutex, so each request's
/// read-modify-persist cycle completes before the next one starts.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<LeagueStore<Database>>>,
    pub credentials: AdminCredentials,
}

impl AppState {
    pub fn new(store: LeagueStore<Database>, credentials: AdminCredentials) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            credentials,
        }
    }
}

pub fn create_router(store: LeagueStore<Database>, credentials: AdminCredentials) -> Router {
    let state = AppState::new(store, credentials);

    let divisions = "/seasons/{season}/divisions/{division}";
    let api = Router::new()
        // Session
        .route("/login", post(handlers::login))
        .route("/defaults", get(handlers::defaults))
        // Seasons
        .route("/seasons", get(handlers::list_seasons).post(handlers::create_season))
        .route("/seasons/{season}/divisions", get(handlers::list_divisions))
        // Games
        .route(
            &format!("{divisions}/games"),
            get(handlers::list_games).post(handlers::add_game),
        )
        .route(&format!("{divisions}/games/{{index}}"), put(handlers::update_game))
        .route(&format!("{divisions}/standings"), get(handlers::get_standings))
        // Teams
        .route("/teams", get(handlers::list_team_registry))
        .route(
            "/teams/{division}",
            get(handlers::list_teams).post(handlers::add_team),
        )
        // News
        .route("/news", get(handlers::list_news).post(handlers::post_news))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
