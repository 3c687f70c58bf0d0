//! League standings tracker.
//!
//! [`store::LeagueStore`] owns seasons, divisions, teams, games and the news
//! feed and persists them through a [`db::KeyValueStore`].
//! [`standings::compute`] derives the ranked table for one division.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod standings;
pub mod store;
