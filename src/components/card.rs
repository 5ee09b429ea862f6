//! Gallery card
//!
//! One clickable card per feed entry: media area, play overlay for
//! videos, and an escaped caption. Click or Enter opens the detail
//! modal with the full entry.

use apod_feed::{escape_html, video, FeedEntry, MediaType};
use dioxus::prelude::*;

use crate::context::use_modal_entry;

/// Media source for a card.
///
/// Images prefer `url`, then `hdurl`. Videos prefer the feed's own
/// thumbnail, then one derived from the video URL. An empty source
/// renders the webview's broken-image state rather than erroring.
fn card_media_src(entry: &FeedEntry) -> String {
    match entry.media_type {
        MediaType::Image => entry
            .url
            .clone()
            .or_else(|| entry.hdurl.clone())
            .unwrap_or_default(),
        MediaType::Video => entry
            .thumbnail_url
            .clone()
            .or_else(|| {
                entry
                    .url
                    .as_deref()
                    .and_then(video::extract_id)
                    .map(|id| video::thumbnail_url(&id))
            })
            .unwrap_or_default(),
        MediaType::Other => String::new(),
    }
}

/// Alt text for the media image.
fn alt_text(entry: &FeedEntry) -> String {
    if !entry.title.is_empty() {
        return entry.title.clone();
    }
    match entry.media_type {
        MediaType::Video => "NASA video".to_string(),
        _ => "NASA image".to_string(),
    }
}

/// Caption markup: escaped title and date. This is the one
/// string-assembled HTML fragment on the card, so both fields go
/// through [`escape_html`].
fn caption_html(entry: &FeedEntry) -> String {
    format!(
        "<strong>{}</strong><br/><small>{}</small>",
        escape_html(&entry.title),
        escape_html(&entry.date)
    )
}

/// Gallery card for one feed entry.
#[component]
pub fn ApodCard(entry: FeedEntry) -> Element {
    let mut modal_entry = use_modal_entry();

    let media_src = card_media_src(&entry);
    let alt = alt_text(&entry);
    let caption = caption_html(&entry);
    let is_video = entry.is_video();
    let unsupported = entry.media_type == MediaType::Other;

    let click_entry = entry.clone();
    let key_entry = entry.clone();

    rsx! {
        article {
            class: "gallery-item",
            tabindex: "0",
            onclick: move |_| modal_entry.set(Some(click_entry.clone())),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    modal_entry.set(Some(key_entry.clone()));
                }
            },

            div { class: "media-wrap",
                if unsupported {
                    div { class: "media-unsupported", "Unsupported media type" }
                } else {
                    img { class: "card-media", src: "{media_src}", alt: "{alt}" }
                }
                if is_video {
                    div { class: "video-play-overlay", "▶" }
                }
            }

            p { class: "card-caption", dangerous_inner_html: "{caption}" }
        }
    }
}
