//! Gallery region
//!
//! Renders the card grid, or one of the placeholder states when there
//! is nothing to show.

use dioxus::prelude::*;

use crate::components::ApodCard;
use crate::context::{use_gallery_state, GalleryState};

/// Shown before the first load.
const IDLE_TEXT: &str = "Press \"Get Space Images\" to load the gallery.";
/// Shown while the fetch is in flight.
const LOADING_TEXT: &str = "🔄 Loading space photos…";
/// Shown on any fetch or parse failure; causes are logged, not surfaced.
const FAILED_TEXT: &str = "⚠️ Failed to load images. Try again later.";
/// Shown when the feed parsed but held no entries.
const EMPTY_TEXT: &str = "No images found.";

fn placeholder(text: &str) -> Element {
    rsx! {
        div { class: "gallery",
            div { class: "placeholder", "{text}" }
        }
    }
}

/// Card grid for the loaded feed, one card per entry in feed order.
#[component]
pub fn Gallery() -> Element {
    let state = use_gallery_state();

    match &*state.read() {
        GalleryState::Idle => placeholder(IDLE_TEXT),
        GalleryState::Loading => placeholder(LOADING_TEXT),
        GalleryState::Failed => placeholder(FAILED_TEXT),
        GalleryState::Loaded(entries) if entries.is_empty() => placeholder(EMPTY_TEXT),
        GalleryState::Loaded(entries) => rsx! {
            div { class: "gallery",
                for (idx, entry) in entries.iter().enumerate() {
                    ApodCard { key: "{idx}", entry: entry.clone() }
                }
            }
        },
    }
}
