//! YouTube URL resolution
//!
//! Best-effort extraction of video identifiers from the URL shapes the
//! feed actually carries: watch URLs, `youtu.be` short links, and embed
//! URLs. No contract with the platform is enforced; a URL that matches
//! nothing simply resolves to no identifier.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

/// Recognized URL shapes, tried in order. Each captures the
/// 11-character identifier.
fn id_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"youtube\.com/.+v=([A-Za-z0-9_-]{11})").expect("hard-coded pattern"),
            Regex::new(r"youtu\.be/([A-Za-z0-9_-]{11})").expect("hard-coded pattern"),
            Regex::new(r"youtube\.com/embed/([A-Za-z0-9_-]{11})").expect("hard-coded pattern"),
        ]
    })
}

/// Extract a video identifier from an arbitrary URL string.
///
/// Tries the three fixed shapes first; when none match, falls back to
/// parsing the input as a URL and reading its `v` query parameter,
/// accepted when at least 6 characters long. The fallback is a
/// documented best-effort relaxation, not validated against the
/// platform's identifier format. Malformed input yields `None`, never
/// an error.
pub fn extract_id(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    for pattern in id_patterns() {
        if let Some(caps) = pattern.captures(raw) {
            if let Some(id) = caps.get(1) {
                return Some(id.as_str().to_string());
            }
        }
    }
    let parsed = Url::parse(raw).ok()?;
    let v = parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())?;
    (v.len() >= 6).then_some(v)
}

/// Thumbnail image URL for a resolved identifier.
pub fn thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}

/// Canonical watch-page URL for a resolved identifier.
pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}

/// Embed-player URL, `None` when no identifier resolved.
pub fn embed_url(id: Option<&str>) -> Option<String> {
    id.map(|id| format!("https://www.youtube.com/embed/{id}"))
}
