//! End-to-end parsing of a realistic feed body, covering the mix of
//! entry shapes the live feed actually serves.

use apod_feed::client::parse_feed;
use apod_feed::{video, MediaType};

const FIXTURE: &str = r#"[
    {
        "date": "2024-01-01",
        "title": "M31: The Andromeda Galaxy",
        "explanation": "The nearest major galaxy to our own.",
        "media_type": "image",
        "url": "https://apod.nasa.gov/apod/image/2401/m31_small.jpg",
        "hdurl": "https://apod.nasa.gov/apod/image/2401/m31_large.jpg"
    },
    {
        "date": "2024-01-02",
        "title": "Rocket Launch Timelapse",
        "explanation": "A launch seen from orbit.",
        "media_type": "video",
        "url": "https://www.youtube.com/watch?v=abcdEFGH123",
        "thumbnail_url": "https://example.com/thumb.jpg"
    },
    {
        "date": "2024-01-03",
        "title": "Eclipse Over the Pacific",
        "explanation": "Totality from a plane.",
        "media_type": "video",
        "url": "https://youtu.be/zyxwVUTS987"
    },
    {
        "date": "2024-01-04",
        "title": "Interactive Sky Map",
        "explanation": "Not an image or a video.",
        "media_type": "interactive",
        "url": "https://example.com/skymap"
    },
    {
        "date": "2024-01-05",
        "title": "Bare Minimum Entry",
        "media_type": "image"
    }
]"#;

#[test]
fn parses_realistic_feed_in_order() {
    let entries = parse_feed(FIXTURE).expect("fixture should parse");
    assert_eq!(entries.len(), 5);

    let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(
        dates,
        ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"]
    );
}

#[test]
fn image_entry_carries_both_resolutions() {
    let entries = parse_feed(FIXTURE).unwrap();
    let m31 = &entries[0];
    assert_eq!(m31.media_type, MediaType::Image);
    assert!(m31.url.as_deref().unwrap().ends_with("m31_small.jpg"));
    assert!(m31.hdurl.as_deref().unwrap().ends_with("m31_large.jpg"));
}

#[test]
fn video_entries_resolve_identifiers() {
    let entries = parse_feed(FIXTURE).unwrap();

    let launch = &entries[1];
    assert!(launch.is_video());
    assert_eq!(launch.thumbnail_url.as_deref(), Some("https://example.com/thumb.jpg"));
    assert_eq!(
        video::extract_id(launch.url.as_deref().unwrap()),
        Some("abcdEFGH123".to_string())
    );

    // Short-link entry has no feed thumbnail; the resolver supplies one.
    let eclipse = &entries[2];
    assert!(eclipse.thumbnail_url.is_none());
    let id = video::extract_id(eclipse.url.as_deref().unwrap()).unwrap();
    assert_eq!(id, "zyxwVUTS987");
    assert_eq!(
        video::thumbnail_url(&id),
        "https://img.youtube.com/vi/zyxwVUTS987/hqdefault.jpg"
    );
}

#[test]
fn unknown_media_type_collapses_to_other() {
    let entries = parse_feed(FIXTURE).unwrap();
    assert_eq!(entries[3].media_type, MediaType::Other);
}

#[test]
fn omitted_fields_default_cleanly() {
    let entries = parse_feed(FIXTURE).unwrap();
    let minimal = &entries[4];
    assert_eq!(minimal.explanation, "");
    assert!(minimal.url.is_none());
    assert!(minimal.hdurl.is_none());
}
