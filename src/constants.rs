//! Shared constants used across the application.

/// Default base URL of the Hacker News Firebase API.
///
/// Overridable through `HN_API_BASE_URL` so tests can point the pipeline at a
/// mock server.
pub const DEFAULT_API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Base of the discussion-page permalink; the item id is appended.
pub const ITEM_PERMALINK_BASE: &str = "https://news.ycombinator.com/item?id=";

/// User agent sent on upstream API requests.
pub const BOT_USER_AGENT: &str = "Hacker News Best 10 Bot";
