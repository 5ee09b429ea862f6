//! Detail modal
//!
//! Single overlay presenting full detail for one selected entry.
//! Driven by the shared modal signal: `None` renders nothing, `Some`
//! renders the overlay populated from that entry alone. Closes on
//! background click, the close control, or Escape.

use apod_feed::{video, FeedEntry, MediaType};
use dioxus::prelude::*;

use crate::context::use_modal_entry;

/// Modal image source: high-resolution first, unlike the card.
fn modal_image_src(entry: &FeedEntry) -> String {
    entry
        .hdurl
        .clone()
        .or_else(|| entry.url.clone())
        .unwrap_or_default()
}

/// Thumbnail for a video entry, feed-provided first, resolver second.
fn video_thumbnail(entry: &FeedEntry) -> Option<String> {
    entry.thumbnail_url.clone().or_else(|| {
        entry
            .url
            .as_deref()
            .and_then(video::extract_id)
            .map(|id| video::thumbnail_url(&id))
    })
}

/// Watch link target: the canonical watch page when an identifier
/// resolves, else the entry's raw URL.
fn watch_href(entry: &FeedEntry) -> Option<String> {
    entry
        .url
        .as_deref()
        .and_then(video::extract_id)
        .map(|id| video::watch_url(&id))
        .or_else(|| entry.url.clone())
}

/// Detail overlay for the currently selected entry.
#[component]
pub fn DetailModal() -> Element {
    let mut modal_entry = use_modal_entry();

    let Some(entry) = modal_entry() else {
        return rsx! {};
    };

    let image_src = modal_image_src(&entry);
    let thumbnail = video_thumbnail(&entry);
    let watch = watch_href(&entry).unwrap_or_default();
    // "Video unavailable" augments the watch link, it never replaces it.
    let video_unavailable = thumbnail.is_none() && entry.url.is_none();
    let is_image = entry.media_type == MediaType::Image;
    let is_video = entry.is_video();
    let alt = entry.title.clone();

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            autofocus: true,
            onclick: move |_| modal_entry.set(None),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    modal_entry.set(None);
                }
            },

            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    "aria-label": "Close",
                    onclick: move |_| modal_entry.set(None),
                    "×"
                }

                div { class: "modal-body",
                    div { class: "modal-media",
                        if is_image {
                            img { class: "modal-image", src: "{image_src}", alt: "{alt}" }
                        }
                        if is_video {
                            if let Some(thumb) = thumbnail {
                                img { class: "modal-image", src: "{thumb}", alt: "{alt}" }
                            }
                            a {
                                class: "watch-button",
                                href: "{watch}",
                                target: "_blank",
                                rel: "noopener",
                                "Watch on YouTube"
                            }
                            if video_unavailable {
                                div { class: "media-unsupported", "Video unavailable" }
                            }
                        }
                    }

                    div { class: "modal-details",
                        h2 { class: "modal-title", "{entry.title}" }
                        p { class: "modal-date", "{entry.date}" }
                        p { class: "modal-explanation", "{entry.explanation}" }
                    }
                }
            }
        }
    }
}
