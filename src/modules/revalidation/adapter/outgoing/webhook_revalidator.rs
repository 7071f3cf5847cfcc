use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::revalidation::application::ports::outgoing::{PathRevalidator, RevalidationError};

pub const SECRET_HEADER: &str = "x-revalidate-secret";

#[derive(Debug, Clone, Default)]
pub struct RevalidationConfig {
    pub webhook_url: Option<String>,
    pub secret: Option<String>,
}

impl RevalidationConfig {
    /// `REVALIDATE_WEBHOOK_URL` and `REVALIDATE_SECRET`; blank means unset.
    pub fn from_env() -> Self {
        let read = |key: &str| {
            std::env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            webhook_url: read("REVALIDATE_WEBHOOK_URL"),
            secret: read("REVALIDATE_SECRET"),
        }
    }
}

#[derive(Serialize)]
struct RevalidatePayload<'a> {
    paths: &'a [String],
}

/// Pushes stale paths to the front end's revalidation endpoint.
#[derive(Debug, Clone)]
pub struct WebhookRevalidator {
    client: reqwest::Client,
    url: String,
    secret: Option<String>,
}

impl WebhookRevalidator {
    pub fn new(url: String, secret: Option<String>) -> Result<Self, RevalidationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RevalidationError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, url, secret))
    }

    pub fn with_client(client: reqwest::Client, url: String, secret: Option<String>) -> Self {
        Self {
            client,
            url,
            secret,
        }
    }
}

#[async_trait]
impl PathRevalidator for WebhookRevalidator {
    async fn revalidate(&self, paths: &[String]) -> Result<(), RevalidationError> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&RevalidatePayload { paths });

        if let Some(secret) = &self.secret {
            request = request.header(SECRET_HEADER, secret);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RevalidationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RevalidationError::Rejected(status.as_u16()));
        }

        tracing::debug!(count = paths.len(), "Revalidation webhook accepted paths");
        Ok(())
    }
}
