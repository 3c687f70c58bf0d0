//! Domain models for the scorekeeper.
//!
//! # Core Concepts
//!
//! - [`League`]: every season by name. A season maps division names to the
//!   division's [`Game`]s in entry order.
//! - [`TeamRegistry`]: teams per division, independent of season.
//! - [`NewsFeed`]: append-only list of news items.
//! - [`TeamRecord`]: a computed standings line; see [`crate::standings`].
//!
//! Games have no id. They are addressed by position within their division,
//! which is why game lists are never sorted or filtered in place.

mod game;
mod input;
mod league;
mod ordered;
mod standings;

pub use game::*;
pub use input::*;
pub use league::*;
pub use ordered::OrderedMap;
pub use standings::*;
