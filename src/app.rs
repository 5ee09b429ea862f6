use apod_feed::{FeedClient, FeedEntry};
use dioxus::prelude::*;

use crate::components::{DetailModal, DidYouKnow, Gallery};
use crate::context::{get_feed_url, GalleryState};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the gallery and modal state, provides both via context, and
/// hosts the single page: header with the load trigger, the "did you
/// know" section, the gallery, and the detail modal.
#[component]
pub fn App() -> Element {
    let mut gallery_state: Signal<GalleryState> = use_signal(|| GalleryState::Idle);
    let modal_entry: Signal<Option<FeedEntry>> = use_signal(|| None);

    use_context_provider(|| gallery_state);
    use_context_provider(|| modal_entry);

    let loading = matches!(*gallery_state.read(), GalleryState::Loading);

    // Load action: one fetch per activation. The trigger is disabled
    // while a fetch is in flight, so loads never overlap.
    let load_feed = move |_| {
        gallery_state.set(GalleryState::Loading);
        spawn(async move {
            let client = FeedClient::new(get_feed_url());
            match client.fetch_entries().await {
                Ok(entries) => {
                    tracing::info!("Loaded {} feed entries", entries.len());
                    gallery_state.set(GalleryState::Loaded(entries));
                }
                Err(e) => {
                    tracing::error!("Failed to load feed: {}", e);
                    gallery_state.set(GalleryState::Failed);
                }
            }
        });
    };

    // Page scroll is locked while the modal is open.
    let app_class = if modal_entry.read().is_some() {
        "app scroll-locked"
    } else {
        "app"
    };

    rsx! {
        style { {GLOBAL_STYLES} }

        div { class: "{app_class}",
            header { class: "site-header",
                h1 { class: "site-title", "Astronomy Picture of the Day" }
                p { class: "site-tagline",
                    "A gallery of daily images and videos from the cosmos"
                }
                button {
                    class: "btn-load",
                    disabled: loading,
                    onclick: load_feed,
                    if loading {
                        "Loading…"
                    } else {
                        "Get Space Images"
                    }
                }
            }

            DidYouKnow {}
            Gallery {}
            DetailModal {}
        }
    }
}
