//! Errors produced while configuring the client or resolving a channel.

use std::path::PathBuf;

/// Everything that can go wrong between loading the API key and returning a playlist ID.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response, or its body could not be read.
    #[error("send request to YouTube API")]
    Request(#[source] reqwest::Error),

    /// YouTube answered with a non-success status code.
    #[error("YouTube API request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response was well-formed but listed no channel for the handle.
    #[error("no channel found for handle '{handle}'")]
    ChannelNotFound { handle: String },

    /// The response body did not have the shape of a `channels.list` response.
    #[error("parse YouTube channels API response as JSON")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("API_KEY is not set (and no API_KEY_FILE was given)")]
    MissingApiKey,

    #[error("read API key from {}", path.display())]
    ApiKeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YouTube API base URL '{url}'")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("YouTube API base URL must be http or https, got '{url}'")]
    UnsupportedBaseUrl { url: String },
}

impl Error {
    /// Whether this error came from talking to YouTube rather than from what it said.
    ///
    /// Covers both transport failures and non-2xx statuses.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Error::Request(_) | Error::Status { .. })
    }
}
