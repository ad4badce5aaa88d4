//! Notification seam: sending a text message to a person or a group.
//!
//! The coordinator treats the channel as a narrow capability; the WhatsApp
//! gateway implementation lives in [`crate::whatsapp`], and tests
//! substitute fakes that record sends.

use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// A message send failed.
///
/// Channel failures never abort a dispatch; they are recorded in the
/// [`crate::dispatch::DispatchResult`] and, for internal-group sends, also
/// logged.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The underlying HTTP request failed (network, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("gateway returned HTTP {0}")]
    HttpStatus(u16),

    /// The channel session is not usable (e.g. device not paired).
    #[error("channel unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Sends text messages to an individual recipient or a fixed group.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Send a message to one person, addressed by phone number.
    async fn send_direct(&self, recipient: &str, text: &str) -> Result<(), ChannelError>;

    /// Send a message to a group chat, addressed by group id.
    async fn send_to_group(&self, group_id: &str, text: &str) -> Result<(), ChannelError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display() {
        let err = ChannelError::HttpStatus(502);
        assert_eq!(err.to_string(), "gateway returned HTTP 502");
    }

    #[test]
    fn unavailable_display() {
        let err = ChannelError::Unavailable("device not paired".into());
        assert_eq!(err.to_string(), "channel unavailable: device not paired");
    }
}
