use std::time::Duration;

use chrono::FixedOffset;
use thiserror::Error;

use crate::constants::DEFAULT_API_BASE_URL;
use crate::hn::RankingKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Delivery
    pub webhook_url: String,

    // Digest
    pub max_posts: usize,
    pub digests: Vec<RankingKind>,
    /// Fixed offset used to render the heading date.
    pub digest_tz: FixedOffset,

    // Upstream API
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or
    /// invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Delivery
            webhook_url: required_env("WEBHOOK_URL")?,

            // Digest
            max_posts: parse_env_usize("MAX_POSTS", 10)?,
            digests: parse_digests(&env_or_default("DIGESTS", "top,best"))?,
            digest_tz: parse_utc_offset(parse_env_i32("DIGEST_UTC_OFFSET_HOURS", 9)?)?,

            // Upstream API
            api_base_url: env_or_default("HN_API_BASE_URL", DEFAULT_API_BASE_URL),
            request_timeout: Duration::from_secs(parse_env_u64("REQUEST_TIMEOUT_SECS", 30)?),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "WEBHOOK_URL".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if url::Url::parse(&self.webhook_url).is_err() {
            return Err(ConfigError::InvalidValue {
                name: "WEBHOOK_URL".to_string(),
                message: "must be a valid URL".to_string(),
            });
        }
        if url::Url::parse(&self.api_base_url).is_err() {
            return Err(ConfigError::InvalidValue {
                name: "HN_API_BASE_URL".to_string(),
                message: "must be a valid URL".to_string(),
            });
        }
        if self.digests.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "DIGESTS".to_string(),
                message: "must name at least one ranking".to_string(),
            });
        }
        Ok(())
    }

    /// Baseline configuration for tests.
    ///
    /// Integration tests override individual fields with struct-update
    /// syntax.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            webhook_url: "http://127.0.0.1:9/webhook".to_string(),
            max_posts: 10,
            digests: vec![RankingKind::Top],
            digest_tz: FixedOffset::east_opt(9 * 3600).expect("static offset is valid"),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_i32(name: &str, default: i32) -> Result<i32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

/// Parse the comma-separated ranking list, e.g. `top,best`.
fn parse_digests(value: &str) -> Result<Vec<RankingKind>, ConfigError> {
    let mut digests = Vec::new();
    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match RankingKind::from_str(&part.to_lowercase()) {
            Some(kind) => digests.push(kind),
            None => {
                return Err(ConfigError::InvalidValue {
                    name: "DIGESTS".to_string(),
                    message: format!(
                        "must be a comma-separated list of 'top' and 'best', got '{part}'"
                    ),
                })
            }
        }
    }
    if digests.is_empty() {
        return Err(ConfigError::InvalidValue {
            name: "DIGESTS".to_string(),
            message: "must name at least one ranking".to_string(),
        });
    }
    Ok(digests)
}

/// Convert a whole-hour UTC offset into a chrono offset, rejecting values
/// chrono cannot represent.
fn parse_utc_offset(hours: i32) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        name: "DIGEST_UTC_OFFSET_HOURS".to_string(),
        message: format!("must be between -23 and 23, got {hours}"),
    };

    if !(-23..=23).contains(&hours) {
        return Err(invalid());
    }
    FixedOffset::east_opt(hours * 3600).ok_or_else(invalid)
}
