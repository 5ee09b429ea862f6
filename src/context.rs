//! Shared state for the APOD gallery.
//!
//! The composition root ([`crate::app::App`]) resolves everything the
//! components need once and provides it via context; children read it
//! through the `use_*` hooks below instead of reaching for globals.

use apod_feed::FeedEntry;
use dioxus::prelude::*;

/// Lifecycle of the gallery region.
///
/// The loaded entries live here verbatim, in feed order. There is no
/// cache: a reload replaces the whole vector.
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryState {
    /// Nothing fetched yet this session
    Idle,
    /// Fetch in flight; the load trigger is disabled until it settles
    Loading,
    /// Feed fetched and parsed
    Loaded(Vec<FeedEntry>),
    /// Fetch or parse failed; the trigger is clickable again
    Failed,
}

/// Get the feed URL resolved at startup.
pub fn get_feed_url() -> String {
    crate::get_feed_url()
}

/// Hook to access the gallery state from context.
pub fn use_gallery_state() -> Signal<GalleryState> {
    use_context::<Signal<GalleryState>>()
}

/// Hook to access the modal selection from context.
///
/// `None` means the modal is closed. `Some(entry)` shows the overlay
/// for that entry; opening with a new entry replaces the previous one
/// wholesale, never merges.
pub fn use_modal_entry() -> Signal<Option<FeedEntry>> {
    use_context::<Signal<Option<FeedEntry>>>()
}
