use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{config::Config, models::message::WebhookPayload};

/// Chat webhook client. One POST per invocation, no retries; the
/// Pub/Sub push subscription retries the whole inbound request on
/// handler failure.
#[derive(Clone)]
pub struct WebhookClient {
    http_client: Client,
    endpoint: String,
}

impl WebhookClient {
    pub fn new(config: &Config) -> Self {
        info!(endpoint = %config.webhook_endpoint, "Webhook client initialized");

        Self {
            http_client: Client::new(),
            endpoint: config.webhook_endpoint.clone(),
        }
    }

    pub async fn post(&self, payload: WebhookPayload) -> Result<(), Error> {
        if self.endpoint.is_empty() {
            return Err(anyhow!("Webhook endpoint is not configured"));
        }

        debug!(endpoint = %self.endpoint, "Posting webhook payload");

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            info!("Webhook payload delivered");
            Ok(())
        } else {
            let status = response.status();
            let error_text = response.text().await?;
            Err(anyhow!("Webhook request failed with {}: {}", status, error_text))
        }
    }
}
