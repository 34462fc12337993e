//! Process configuration: the API key and where requests are sent.
//!
//! The key is read once at startup and never changes afterwards. It is taken from `API_KEY`, or,
//! if that is unset or blank, from the file named by `API_KEY_FILE`. Call [`load_env_files`] first
//! to pull those variables out of `.env` / `.secrets.env` in the working directory.

use crate::Error;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Where the YouTube Data API lives unless `YOUTUBE_API_BASE_URL` says otherwise.
pub const DEFAULT_BASE_URL: &str = "https://youtube.googleapis.com";

const ENV_FILES: [&str; 2] = [".env", ".secrets.env"];

/// Loads `.env` and `.secrets.env` from the working directory into the process environment.
///
/// Missing files are ignored.
pub fn load_env_files() {
    simple_env_load::load_env_from(ENV_FILES);
}

/// A YouTube Data API key.
///
/// The key is never printed by [`fmt::Debug`], since it ends up in logged spans.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    api_key: ApiKey,
    /// `{base}/youtube/v3/channels`, resolved once so that every request reuses it.
    channels_url: Url,
}

impl Config {
    /// Builds a configuration from an API key and the API's base URL.
    ///
    /// The base URL must be `http` or `https`. Any path it carries is kept as a prefix.
    pub fn new(api_key: ApiKey, base_url: &str) -> Result<Self, Error> {
        let mut channels_url = Url::parse(base_url).map_err(|source| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        if !matches!(channels_url.scheme(), "http" | "https") {
            return Err(Error::UnsupportedBaseUrl {
                url: base_url.to_string(),
            });
        }

        channels_url.set_query(None);
        channels_url.set_fragment(None);
        channels_url
            .path_segments_mut()
            .map_err(|()| Error::UnsupportedBaseUrl {
                url: base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(["youtube", "v3", "channels"]);

        Ok(Self {
            api_key,
            channels_url,
        })
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let api_key = match lookup("API_KEY").filter(|key| !key.trim().is_empty()) {
            Some(key) => key,
            None => {
                let Some(path) = lookup("API_KEY_FILE") else {
                    return Err(Error::MissingApiKey);
                };
                let path = PathBuf::from(path);
                tracing::debug!(path = %path.display(), "reading API key from file");
                std::fs::read_to_string(&path).map_err(|source| Error::ApiKeyFile { path, source })?
            }
        };

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let base_url =
            lookup("YOUTUBE_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(ApiKey::new(api_key), &base_url)
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// The full URL of the `channels.list` endpoint.
    pub fn channels_url(&self) -> &Url {
        &self.channels_url
    }
}
