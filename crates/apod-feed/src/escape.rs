//! Minimal HTML escaping
//!
//! The UI assembles a handful of markup strings by hand (card captions,
//! the fact section) and injects them via `dangerous_inner_html`; every
//! string that crosses that boundary goes through [`escape_html`] first.
//! Plain text nodes are escaped by the framework and don't need it.

/// Replace the five HTML-significant characters with their named
/// entities. All other characters pass through unchanged; total over
/// every input.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_significant_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_no_raw_significant_characters_survive() {
        let escaped = escape_html("a<b>c\"d'e&f");
        for c in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(c), "raw {c:?} survived escaping");
        }
        // '&' only as an entity prefix
        assert!(!escaped.contains("& "));
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(escape_html("Venus spins backward."), "Venus spins backward.");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(escape_html("röntgen ▶ 星"), "röntgen ▶ 星");
    }
}
