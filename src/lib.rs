//! Hacker News digest bot library.
//!
//! Fetches the current top/best stories from the Hacker News API, renders
//! each as an embed card, and delivers one digest message per ranking to a
//! chat webhook.

pub mod config;
pub mod constants;
pub mod digest;
pub mod hn;
pub mod sanitize;
pub mod webhook;
