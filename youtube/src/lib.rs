//! Resolve a YouTube channel's uploads playlist from its public handle.
//!
//! See [`YouTubeClient::resolve_playlist_id`] for the one thing this crate does, and [`config`]
//! for where the API key comes from.

pub mod config;
pub mod error;
pub mod youtube_api;

pub use config::{ApiKey, Config};
pub use error::Error;
pub use youtube_api::YouTubeClient;
