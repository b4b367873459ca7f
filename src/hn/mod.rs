//! Upstream Hacker News API surface: typed errors, ranking endpoints, and
//! the fetch-and-normalize pipeline for story items.

pub mod client;
pub mod item;

pub use client::HnClient;
pub use item::{PostItem, RawItem};

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a required HTTP call, upstream or webhook.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or transport failure before a response arrived.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint answered outside the 2xx range.
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
    /// The response body was not the expected shape.
    #[error("malformed response from {url}")]
    MalformedResponse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Ranking endpoints a digest can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingKind {
    /// Current front-page ranking.
    Top,
    /// Recent highest-voted ranking.
    Best,
}

impl RankingKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Best => "best",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Self::Top),
            "best" => Some(Self::Best),
            _ => None,
        }
    }

    /// File name of the ranking list under the API base URL.
    #[must_use]
    pub fn stories_path(&self) -> &'static str {
        match self {
            Self::Top => "topstories.json",
            Self::Best => "beststories.json",
        }
    }
}
