//! Notification sinks accepting one text chunk per call

use crate::error::DispatchError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Timeout for a single webhook delivery
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(30);

/// Destination for report chunks
#[async_trait]
pub trait Sink: Send + Sync {
    /// Deliver a single chunk
    async fn send(&self, chunk: &str) -> Result<(), DispatchError>;
}

#[async_trait]
impl<T: Sink + ?Sized> Sink for Box<T> {
    async fn send(&self, chunk: &str) -> Result<(), DispatchError> {
        (**self).send(chunk).await
    }
}

#[async_trait]
impl<'a, T: Sink + ?Sized> Sink for &'a T {
    async fn send(&self, chunk: &str) -> Result<(), DispatchError> {
        (**self).send(chunk).await
    }
}

/// Body accepted by chat webhooks (`{"content": "..."}`)
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Posts each chunk to a chat webhook endpoint
pub struct WebhookSink {
    client: Client,
    url: String,
}

impl WebhookSink {
    /// Create a sink posting to `url`
    pub fn new(url: impl Into<String>) -> Result<Self, DispatchError> {
        let client = Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .map_err(|e| DispatchError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Sink for WebhookSink {
    async fn send(&self, chunk: &str) -> Result<(), DispatchError> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload { content: chunk })
            .send()
            .await
            .map_err(|e| DispatchError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Prints each chunk to stdout (dry-run delivery)
#[derive(Debug, Default)]
pub struct StdoutSink;

#[async_trait]
impl Sink for StdoutSink {
    async fn send(&self, chunk: &str) -> Result<(), DispatchError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", chunk)?;
        writeln!(stdout)?;
        stdout.flush()?;
        Ok(())
    }
}
