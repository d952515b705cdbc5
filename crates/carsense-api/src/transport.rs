// HTTP transport configuration.
//
// Holds everything needed to build the underlying `reqwest::Client` for a
// runtime connection. The bearer token lives behind `SecretString` so it
// never shows up in Debug output or logs.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection parameters for a runtime API client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Runtime root, e.g. `http://homehub.local:8123`.
    pub base_url: Url,
    /// Long-lived access token, sent as a bearer header on every request.
    pub token: SecretString,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Accept self-signed certificates (common on LAN-only runtimes).
    pub accept_invalid_certs: bool,
}

impl TransportConfig {
    /// Create a config with default timeout and strict TLS.
    pub fn new(base_url: Url, token: SecretString) -> Self {
        Self {
            base_url,
            token,
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Accept self-signed certificates.
    pub fn danger_accept_invalid_certs(mut self) -> Self {
        self.accept_invalid_certs = true;
        self
    }

    /// Build the `reqwest::Client` for this configuration.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()?;
        Ok(client)
    }
}
