//! Core YouTube API client functionality.

use crate::Error;
use crate::config::{ApiKey, Config};
use crate::youtube_api::channels::{Channel, ChannelListResponse};
use tracing::instrument;
use url::Url;

/// Client for the public (API-key authenticated) parts of the YouTube Data API v3.
///
/// Every method issues exactly one request. Nothing is retried, paginated, or cached.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    api_key: ApiKey,
    /// `{base}/youtube/v3/channels`
    channels_url: Url,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client that sends its requests through an existing HTTP client.
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        Self {
            api_key: config.api_key().clone(),
            channels_url: config.channels_url().clone(),
            client,
        }
    }

    /// Creates a client with a default-configured HTTP client.
    ///
    /// No request timeout is set beyond what `reqwest` does by default.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder().build().map_err(Error::Request)?;
        Ok(Self::new(config, client))
    }

    /// Makes a GET request to the YouTube API with the API key attached.
    ///
    /// Any non-2xx status is turned into [`Error::Status`] without looking at the body beyond
    /// capturing it as text.
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn make_request(
        &self,
        url: &Url,
        query_params: &[(&str, &str)],
    ) -> Result<reqwest::Response, Error> {
        // reqwest errors embed the request URL, and with it the API key
        let response = self
            .client
            .get(url.clone())
            .query(query_params)
            .query(&[("key", self.api_key.secret())])
            .send()
            .await
            .map_err(|e| Error::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::Status { status, body });
        }

        Ok(response)
    }

    /// Looks up a single channel by its public handle.
    ///
    /// Uses the `channels.list` API with `forHandle`, requesting only `contentDetails`. The handle
    /// is passed along as-is; YouTube decides what it matches (with or without a leading `@`).
    ///
    /// # Errors
    ///
    /// * [`Error::Request`] / [`Error::Status`] if the request itself failed
    /// * [`Error::MalformedResponse`] if the body isn't a `channels.list` response
    /// * [`Error::ChannelNotFound`] if YouTube returned no channel for the handle
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    pub async fn get_channel_by_handle(&self, handle: &str) -> Result<Channel, Error> {
        let query_params = [("part", "contentDetails"), ("forHandle", handle)];

        let response = self.make_request(&self.channels_url, &query_params).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Request(e.without_url()))?;

        let channels: ChannelListResponse =
            serde_json::from_slice(&body).map_err(Error::MalformedResponse)?;

        tracing::debug!(
            handle,
            total_results = channels.page_info.total_results,
            returned_items = channels.items.len(),
            "fetched channels"
        );

        channels
            .items
            .into_iter()
            .next()
            .ok_or_else(|| Error::ChannelNotFound {
                handle: handle.to_string(),
            })
    }

    /// Returns the ID of the playlist holding all of a channel's public uploads.
    ///
    /// Both outcomes are logged before returning: success at `info`, failure at `error`.
    #[instrument(skip(self))]
    pub async fn resolve_playlist_id(&self, handle: &str) -> Result<String, Error> {
        match self.get_channel_by_handle(handle).await {
            Ok(channel) => {
                let uploads = channel.content_details.related_playlists.uploads;
                tracing::info!(
                    handle,
                    channel_id = channel.id,
                    playlist_id = uploads,
                    "fetched channel data"
                );
                Ok(uploads)
            }
            Err(e) => {
                tracing::error!(handle, error = %e, "failed to fetch channel data");
                Err(e)
            }
        }
    }
}
