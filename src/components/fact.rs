//! "Did you know" section
//!
//! One random fact, chosen once when the page mounts and left alone
//! through gallery reloads.

use apod_feed::{escape_html, facts};
use dioxus::prelude::*;

/// Random-fact section shown above the gallery.
#[component]
pub fn DidYouKnow() -> Element {
    // Signal initializer runs once; re-renders keep the same fact.
    let fact = use_signal(facts::random_fact);
    let fact_html = format!("<h3>Did you know?</h3><p>{}</p>", escape_html(fact()));

    rsx! {
        section {
            class: "did-you-know",
            dangerous_inner_html: "{fact_html}",
        }
    }
}

#[cfg(test)]
mod tests {
    use apod_feed::{escape_html, facts};

    #[test]
    fn test_fact_markup_is_escaped() {
        for fact in facts::FACTS {
            let html = format!("<h3>Did you know?</h3><p>{}</p>", escape_html(fact));
            // The fact body must not smuggle markup; apostrophes in the
            // source text arrive as entities.
            assert!(!escape_html(fact).contains('\''));
            assert!(html.starts_with("<h3>Did you know?</h3>"));
        }
    }
}
