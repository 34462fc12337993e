//! YouTube Data API v3 client library.
//!
//! Only the slice of the API needed to go from a channel's public handle to its uploads playlist
//! is covered: a single `channels.list` call with `part=contentDetails`, authenticated by a plain
//! API key (no OAuth).
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_uploads::{Config, YouTubeClient};
//!
//! # async fn example() -> Result<(), youtube_uploads::Error> {
//! let config = Config::from_env()?;
//! let client = YouTubeClient::from_config(&config)?;
//!
//! let uploads = client.resolve_playlist_id("MrBeast").await?;
//! println!("uploads playlist: {uploads}");
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod types;

// Re-export main types for convenience
pub use client::YouTubeClient;
pub use types::PageInfo;

pub use channels::{Channel, ChannelContentDetails, ChannelListResponse, RelatedPlaylists};
