//! Feed client
//!
//! One GET against the static feed URL, body parsed as an ordered JSON
//! array of entries. No retry, no timeout, no caching: every failure
//! mode surfaces as a [`FeedError`] and the caller decides what the
//! user sees.

use crate::error::{FeedError, FeedResult};
use crate::types::FeedEntry;

/// Default feed location: a static JSON array, no query parameters and
/// no authentication.
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// HTTP client for the APOD feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    feed_url: String,
}

impl FeedClient {
    /// Create a client for the given feed URL.
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            feed_url: feed_url.into(),
        }
    }

    /// The URL this client fetches from.
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch and parse the feed.
    pub async fn fetch_entries(&self) -> FeedResult<Vec<FeedEntry>> {
        tracing::debug!("Fetching feed from {}", self.feed_url);

        let response = self.http.get(&self.feed_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let entries = parse_feed(&body)?;
        tracing::debug!("Feed returned {} entries", entries.len());
        Ok(entries)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// Parse a feed body as an ordered JSON array of entries.
///
/// A body that is not JSON at all is a parse failure. A body that
/// parses but is not an array (`null`, an object) is an empty feed:
/// the gallery shows its own empty placeholder for that, distinct from
/// the failure placeholder.
///
/// Factored out of [`FeedClient::fetch_entries`] so body handling is
/// testable without a network.
pub fn parse_feed(body: &str) -> Result<Vec<FeedEntry>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Array(items) => {
            items.into_iter().map(serde_json::from_value).collect()
        }
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaType;

    #[test]
    fn test_parse_preserves_order() {
        let body = r#"[
            {"title": "First", "date": "2024-01-01", "media_type": "image"},
            {"title": "Second", "date": "2024-01-02", "media_type": "image"},
            {"title": "Third", "date": "2024-01-03", "media_type": "video"}
        ]"#;
        let entries = parse_feed(body).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "First");
        assert_eq!(entries[2].title, "Third");
        assert_eq!(entries[2].media_type, MediaType::Video);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_feed("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_treats_non_array_json_as_empty() {
        assert!(parse_feed("null").unwrap().is_empty());
        assert!(parse_feed(r#"{"title": "not a list"}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_feed("not json").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_array_elements() {
        assert!(parse_feed(r#"["just a string"]"#).is_err());
    }

    #[test]
    fn test_default_client_uses_default_url() {
        let client = FeedClient::default();
        assert_eq!(client.feed_url(), DEFAULT_FEED_URL);
    }
}
