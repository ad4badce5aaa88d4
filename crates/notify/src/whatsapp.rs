//! WhatsApp channel backed by an HTTP gateway sidecar.
//!
//! The gateway owns the WhatsApp session (pairing, reconnects, the wire
//! protocol itself); this client only exercises its two send endpoints:
//!
//! - `POST {base}/send` with `{ "recipient": ..., "message": ... }`
//! - `POST {base}/send-group` with `{ "group_id": ..., "message": ... }`
//!
//! Sends are bounded by a configurable timeout so a wedged gateway cannot
//! hang webhook requests. No retries: a failed send is terminal for that
//! attempt, and the dispatch layer records it rather than re-driving it.

use std::time::Duration;

use async_trait::async_trait;

use crate::channel::{ChannelError, NotificationChannel};

/// Default per-send timeout when none is configured.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends messages through the WhatsApp HTTP gateway.
pub struct WhatsAppGateway {
    client: reqwest::Client,
    base_url: String,
}

impl WhatsAppGateway {
    /// Create a gateway client with a pre-configured HTTP client.
    ///
    /// The timeout applies to each individual send.
    pub fn new(base_url: impl Into<String>, send_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(send_timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Execute a single POST and check the response status.
    async fn post(&self, path: &str, payload: &serde_json::Value) -> Result<(), ChannelError> {
        let url = format!("{}/{path}", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(ChannelError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationChannel for WhatsAppGateway {
    async fn send_direct(&self, recipient: &str, text: &str) -> Result<(), ChannelError> {
        let payload = serde_json::json!({
            "recipient": recipient,
            "message": text,
        });
        self.post("send", &payload).await
    }

    async fn send_to_group(&self, group_id: &str, text: &str) -> Result<(), ChannelError> {
        let payload = serde_json::json!({
            "group_id": group_id,
            "message": text,
        });
        self.post("send-group", &payload).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_panic() {
        let _gateway = WhatsAppGateway::new("http://localhost:9001", DEFAULT_SEND_TIMEOUT);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let gateway = WhatsAppGateway::new("http://localhost:9001/", DEFAULT_SEND_TIMEOUT);
        assert_eq!(gateway.base_url, "http://localhost:9001");
    }
}
