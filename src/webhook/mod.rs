//! Webhook delivery for finished digest documents.

pub mod payload;

use reqwest::{Client, StatusCode};
use tracing::debug;

use self::payload::WebhookPayload;
use crate::config::Config;
use crate::hn::FetchError;

/// Outcome of one delivery attempt.
///
/// A non-2xx status lands here rather than in an error; the caller decides
/// what to log.
#[derive(Debug)]
pub struct DeliveryResult {
    pub status: StatusCode,
    pub body: String,
}

impl DeliveryResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Client for the digest delivery endpoint.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    endpoint: String,
}

impl WebhookClient {
    /// Create a new client from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            endpoint: config.webhook_url.clone(),
        }
    }

    /// POST one digest document to the endpoint. No retries.
    ///
    /// # Errors
    ///
    /// Returns an error only on a network-level failure; any response,
    /// 2xx or not, is reported through the result.
    pub async fn deliver(&self, document: &WebhookPayload) -> Result<DeliveryResult, FetchError> {
        debug!(url = %self.endpoint, embeds = document.embeds.len(), "Delivering digest");

        let response = self
            .http
            .post(&self.endpoint)
            .json(document)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Ok(DeliveryResult { status, body })
    }
}
