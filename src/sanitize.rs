//! Plain-text sanitization for story bodies.

use std::sync::LazyLock;

use regex::Regex;

/// Display budget for a sanitized body, ellipsis included.
const MAX_BODY_CHARS: usize = 280;

/// Marker appended when a body is cut to the display budget.
const ELLIPSIS: &str = "...";

/// Generic markup tag: `<`, the shortest possible run, `>`.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<.*?>").expect("Invalid tag pattern"));

/// Reduce raw markup from the API to a bounded plain-text snippet.
///
/// Tags are stripped first and entities decoded second, so markup escaped in
/// the source survives as literal text. Output longer than 280 characters is
/// cut to 277 and terminated with `...`, yielding exactly 280.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(raw, "");
    let decoded = html_escape::decode_html_entities(stripped.as_ref());

    if decoded.chars().count() > MAX_BODY_CHARS {
        let mut cut: String = decoded
            .chars()
            .take(MAX_BODY_CHARS - ELLIPSIS.len())
            .collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        decoded.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(sanitize("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_strip_is_non_greedy() {
        // A greedy pattern would eat everything between the first < and last >.
        assert_eq!(sanitize("<i>a</i> stays <i>b</i>"), "a stays b");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(sanitize("Ben &amp; Jerry&#x27;s"), "Ben & Jerry's");
    }

    #[test]
    fn test_escaped_markup_survives_as_text() {
        // Tags are removed before decoding, so escaped brackets come through.
        assert_eq!(sanitize("use &lt;b&gt; for bold"), "use <b> for bold");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(sanitize("no markup here"), "no markup here");
    }

    #[test]
    fn test_exact_budget_untouched() {
        let text = "a".repeat(280);
        assert_eq!(sanitize(&text), text);
    }

    #[test]
    fn test_truncates_to_budget_with_ellipsis() {
        let text = "a".repeat(300);
        let out = sanitize(&text);
        assert_eq!(out.chars().count(), 280);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..277], &text[..277]);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let text = "é".repeat(300);
        let out = sanitize(&text);
        assert_eq!(out.chars().count(), 280);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncation_applies_after_decode() {
        // 300 escaped ampersands decode to 300 chars, over budget.
        let text = "&amp;".repeat(300);
        let out = sanitize(&text);
        assert_eq!(out.chars().count(), 280);
        assert!(out.starts_with("&&&"));
        assert!(out.ends_with("..."));
    }
}
