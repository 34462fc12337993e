//! YouTube Channels API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `channels.list` API call.
///
/// Contains a list of [`Channel`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#channelListResponse`.
    pub kind: String,
    /// A list of channels that match the request criteria.
    ///
    /// YouTube leaves this out entirely when nothing matched, e.g. for an unknown handle.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `channel` resource contains information about a YouTube channel.
///
/// Only the parts requested with `part=contentDetails` are modeled.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    #[serde(rename = "contentDetails")]
    pub content_details: ChannelContentDetails,
}

/// See: <https://developers.google.com/youtube/v3/docs/channels#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

/// Playlists that YouTube maintains on the channel's behalf.
#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    /// The ID of the playlist holding every video the channel has uploaded.
    ///
    /// By convention this is the channel ID with its `UC` prefix swapped for `UU`.
    pub uploads: String,
    /// The ID of the playlist of videos the channel has liked.
    ///
    /// Usually absent, since YouTube only reports it for the caller's own channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_channel_list() {
        let json = r#"{
            "kind": "youtube#channelListResponse",
            "etag": "abc",
            "pageInfo": { "totalResults": 1, "resultsPerPage": 5 },
            "items": [{
                "kind": "youtube#channel",
                "etag": "def",
                "id": "UCX6OQ3DkcsbYNE6H8uQQuVA",
                "contentDetails": {
                    "relatedPlaylists": {
                        "likes": "",
                        "uploads": "UUX6OQ3DkcsbYNE6H8uQQuVA"
                    }
                }
            }]
        }"#;

        let response: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page_info.total_results, 1);
        assert_eq!(response.items.len(), 1);
        let channel = &response.items[0];
        assert_eq!(channel.id, "UCX6OQ3DkcsbYNE6H8uQQuVA");
        assert_eq!(
            channel.content_details.related_playlists.uploads,
            "UUX6OQ3DkcsbYNE6H8uQQuVA"
        );
        assert_eq!(
            channel.content_details.related_playlists.likes.as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_deserialize_without_items() {
        // what YouTube sends back for a handle it doesn't know
        let json = r#"{
            "kind": "youtube#channelListResponse",
            "etag": "abc",
            "pageInfo": { "totalResults": 0, "resultsPerPage": 5 }
        }"#;

        let response: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.page_info.total_results, 0);
        assert_eq!(response.next_page_token, None);
    }

    #[test]
    fn test_missing_uploads_is_an_error() {
        let json = r#"{
            "kind": "youtube#channelListResponse",
            "items": [{ "id": "UC123", "contentDetails": { "relatedPlaylists": {} } }]
        }"#;

        assert!(serde_json::from_str::<ChannelListResponse>(json).is_err());
    }
}
