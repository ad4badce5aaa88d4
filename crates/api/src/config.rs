use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields except the group id have sensible defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    /// Bounds the post-shutdown connection drain.
    pub shutdown_timeout_secs: u64,
    /// WhatsApp gateway base URL (default: `http://localhost:9001`).
    pub whatsapp_gateway_url: String,
    /// Per-send timeout against the gateway in seconds (default: `10`).
    pub send_timeout_secs: u64,
    /// The fixed operations-group chat id. Required.
    pub internal_group_id: String,
    /// Base URL for property listing links in internal alerts
    /// (default: `https://acrely.in/property`).
    pub property_link_base: String,
    /// When set, every user-facing message is redirected to this number.
    /// Unset in production.
    pub test_recipient_override: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                      |
    /// |---------------------------|------------------------------|
    /// | `HOST`                    | `0.0.0.0`                    |
    /// | `PORT`                    | `8080`                       |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                         |
    /// | `SHUTDOWN_TIMEOUT_SECS`   | `30`                         |
    /// | `WHATSAPP_GATEWAY_URL`    | `http://localhost:9001`      |
    /// | `SEND_TIMEOUT_SECS`       | `10`                         |
    /// | `INTERNAL_GROUP_ID`       | (required)                   |
    /// | `PROPERTY_LINK_BASE`      | `https://acrely.in/property` |
    /// | `TEST_RECIPIENT_OVERRIDE` | (unset)                      |
    ///
    /// Panics on a missing group id or unparseable numbers -- we want
    /// misconfiguration to fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let whatsapp_gateway_url = std::env::var("WHATSAPP_GATEWAY_URL")
            .unwrap_or_else(|_| "http://localhost:9001".into());

        let send_timeout_secs: u64 = std::env::var("SEND_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("SEND_TIMEOUT_SECS must be a valid u64");

        let internal_group_id =
            std::env::var("INTERNAL_GROUP_ID").expect("INTERNAL_GROUP_ID must be set");

        let property_link_base = std::env::var("PROPERTY_LINK_BASE")
            .unwrap_or_else(|_| "https://acrely.in/property".into());

        let test_recipient_override = std::env::var("TEST_RECIPIENT_OVERRIDE")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            host,
            port,
            request_timeout_secs,
            shutdown_timeout_secs,
            whatsapp_gateway_url,
            send_timeout_secs,
            internal_group_id,
            property_link_base,
            test_recipient_override,
        }
    }

    /// Per-send timeout as a [`Duration`].
    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }

    /// Graceful-shutdown drain bound as a [`Duration`].
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
