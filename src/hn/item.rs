//! Item records as the API returns them, and their normalized form.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::constants::ITEM_PERMALINK_BASE;
use crate::sanitize::sanitize;

/// An item record as served by the item endpoint.
///
/// Only `id` is guaranteed; the API omits every other field freely, so a
/// record without one still deserializes.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub id: u64,
    pub by: Option<String>,
    pub title: Option<String>,
    pub descendants: Option<u64>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub time: i64,
    pub url: Option<String>,
    pub text: Option<String>,
}

/// Normalized in-memory representation of one discussion post.
///
/// Held only for the duration of one run; nothing persists across runs.
#[derive(Debug, Clone)]
pub struct PostItem {
    pub id: u64,
    /// Creation time as an ISO-8601 string with millisecond precision, UTC.
    pub created_at: String,
    pub author: Option<String>,
    pub title: String,
    pub comment_count: Option<u64>,
    pub score: i64,
    /// Discussion-page URL, always non-empty.
    pub permalink: String,
    /// The post's external link, or the permalink when it has none.
    pub external_url: String,
    /// Sanitized body, empty when the record has no text.
    pub body_text: String,
}

impl From<RawItem> for PostItem {
    fn from(raw: RawItem) -> Self {
        let permalink = permalink_for(raw.id);
        let external_url = raw
            .url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| permalink.clone());
        let body_text = raw.text.as_deref().map(sanitize).unwrap_or_default();

        Self {
            id: raw.id,
            created_at: format_created_at(raw.time),
            author: raw.by,
            title: raw.title.unwrap_or_default(),
            comment_count: raw.descendants,
            score: raw.score,
            permalink,
            external_url,
            body_text,
        }
    }
}

/// Discussion-page URL for an item id.
fn permalink_for(id: u64) -> String {
    format!("{ITEM_PERMALINK_BASE}{id}")
}

/// Render epoch seconds as `2023-11-14T22:13:20.000Z`.
///
/// Out-of-range timestamps fall back to the epoch rather than failing the
/// whole item.
fn format_created_at(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: u64) -> RawItem {
        RawItem {
            id,
            by: Some("alice".to_string()),
            title: Some("Foo".to_string()),
            descendants: Some(5),
            score: 100,
            time: 1_700_000_000,
            url: None,
            text: None,
        }
    }

    #[test]
    fn test_permalink_is_deterministic() {
        let post = PostItem::from(raw(42));
        assert_eq!(post.permalink, "https://news.ycombinator.com/item?id=42");
    }

    #[test]
    fn test_missing_url_falls_back_to_permalink() {
        let post = PostItem::from(raw(42));
        assert_eq!(post.external_url, post.permalink);
        assert!(!post.external_url.is_empty());
    }

    #[test]
    fn test_empty_url_falls_back_to_permalink() {
        let post = PostItem::from(RawItem {
            url: Some(String::new()),
            ..raw(7)
        });
        assert_eq!(post.external_url, post.permalink);
    }

    #[test]
    fn test_present_url_is_kept() {
        let post = PostItem::from(RawItem {
            url: Some("https://example.com/story".to_string()),
            ..raw(7)
        });
        assert_eq!(post.external_url, "https://example.com/story");
    }

    #[test]
    fn test_missing_text_becomes_empty_body() {
        let post = PostItem::from(raw(42));
        assert_eq!(post.body_text, "");
    }

    #[test]
    fn test_body_text_is_sanitized() {
        let post = PostItem::from(RawItem {
            text: Some("<p>Ben &amp; Jerry</p>".to_string()),
            ..raw(7)
        });
        assert_eq!(post.body_text, "Ben & Jerry");
    }

    #[test]
    fn test_timestamp_rendering() {
        let post = PostItem::from(raw(42));
        assert_eq!(post.created_at, "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_missing_time_renders_epoch() {
        let post = PostItem::from(RawItem { time: 0, ..raw(7) });
        assert_eq!(post.created_at, "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_field_mapping() {
        let post = PostItem::from(raw(42));
        assert_eq!(post.id, 42);
        assert_eq!(post.author.as_deref(), Some("alice"));
        assert_eq!(post.title, "Foo");
        assert_eq!(post.comment_count, Some(5));
        assert_eq!(post.score, 100);
    }

    #[test]
    fn test_sparse_record_deserializes() {
        let raw_item: RawItem =
            serde_json::from_str(r#"{"id": 9}"#).expect("sparse item should parse");
        let post = PostItem::from(raw_item);
        assert_eq!(post.title, "");
        assert_eq!(post.author, None);
        assert_eq!(post.comment_count, None);
        assert_eq!(post.score, 0);
        assert_eq!(post.external_url, post.permalink);
    }
}
