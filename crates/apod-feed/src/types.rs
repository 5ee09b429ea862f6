//! Feed entry types
//!
//! One record per day of astronomy content, deserialized verbatim from
//! the static JSON feed. Entries are immutable once parsed; gallery
//! order is feed order.

use serde::Deserialize;

/// Kind of media an entry carries.
///
/// The feed declares `"image"` or `"video"`; anything else (including a
/// missing field) collapses to [`MediaType::Other`] and renders as
/// unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum MediaType {
    Image,
    Video,
    #[default]
    Other,
}

impl From<String> for MediaType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Other,
        }
    }
}

/// One Astronomy Picture of the Day entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedEntry {
    /// Entry title, empty when the feed omits it
    #[serde(default)]
    pub title: String,

    /// Publication date, display-only (never parsed)
    #[serde(default)]
    pub date: String,

    /// Long-form explanation shown in the detail modal
    #[serde(default)]
    pub explanation: String,

    /// Declared media kind
    #[serde(default)]
    pub media_type: MediaType,

    /// Primary media location
    #[serde(default)]
    pub url: Option<String>,

    /// High-resolution image location, image entries only
    #[serde(default)]
    pub hdurl: Option<String>,

    /// Pre-rendered thumbnail, video entries only
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl FeedEntry {
    /// True when the entry declares video media.
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_entry_deserializes() {
        let json = r#"{
            "title": "Andromeda",
            "date": "2024-01-01",
            "explanation": "A galaxy.",
            "media_type": "image",
            "url": "https://x/img.jpg",
            "hdurl": "https://x/img_hd.jpg"
        }"#;
        let entry: FeedEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.media_type, MediaType::Image);
        assert_eq!(entry.url.as_deref(), Some("https://x/img.jpg"));
        assert_eq!(entry.hdurl.as_deref(), Some("https://x/img_hd.jpg"));
        assert!(entry.thumbnail_url.is_none());
        assert!(!entry.is_video());
    }

    #[test]
    fn test_unknown_media_type_is_other() {
        let json = r#"{"title": "t", "date": "d", "media_type": "hologram"}"#;
        let entry: FeedEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.media_type, MediaType::Other);
    }

    #[test]
    fn test_missing_fields_default() {
        let entry: FeedEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry.title, "");
        assert_eq!(entry.date, "");
        assert_eq!(entry.explanation, "");
        assert_eq!(entry.media_type, MediaType::Other);
        assert!(entry.url.is_none());
    }

    #[test]
    fn test_video_entry_deserializes() {
        let json = r#"{
            "title": "Launch",
            "media_type": "video",
            "url": "https://www.youtube.com/watch?v=abcdEFGH123"
        }"#;
        let entry: FeedEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_video());
    }
}
