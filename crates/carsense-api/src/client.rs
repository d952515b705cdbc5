// Runtime API HTTP client
//
// Wraps `reqwest::Client` with runtime-specific URL construction, bearer
// auth, and status-code triage. Endpoints are few and flat: registry
// listing and detail, state reads, and fire-and-forget event posts.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{RegistryEntry, RegistryEntryDetail, StatePayload};
use crate::transport::TransportConfig;

/// Async client for the home-automation runtime's HTTP API.
///
/// All methods return decoded payloads; HTTP errors are mapped onto
/// [`Error`] variants before the caller sees them. The client holds no
/// mutable state and is cheap to clone.
#[derive(Clone)]
pub struct RuntimeClient {
    http: reqwest::Client,
    base_url: Url,
    token: SecretString,
}

impl RuntimeClient {
    /// Create a new client from a [`TransportConfig`].
    pub fn new(transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: transport.base_url.clone(),
            token: transport.token.clone(),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Used by tests that need full control over the underlying client.
    pub fn with_client(http: reqwest::Client, base_url: Url, token: SecretString) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// The runtime base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// List every entity known to the registry.
    pub async fn list_registry_entries(&self) -> Result<Vec<RegistryEntry>, Error> {
        self.get(self.api_url("registry/entities")?).await
    }

    /// Fetch the registry record for one entity (original name etc.).
    pub async fn get_registry_entry(
        &self,
        entity_id: &str,
    ) -> Result<RegistryEntryDetail, Error> {
        self.get(self.api_url(&format!("registry/entities/{entity_id}"))?)
            .await
    }

    /// Read every entity state the runtime currently holds.
    pub async fn list_states(&self) -> Result<Vec<StatePayload>, Error> {
        self.get(self.api_url("states")?).await
    }

    /// Read the state of a single entity.
    pub async fn get_state(&self, entity_id: &str) -> Result<StatePayload, Error> {
        self.get(self.api_url(&format!("states/{entity_id}"))?).await
    }

    /// Fire a custom event on the runtime's event bus. Fire-and-forget:
    /// the response body is discarded, only the status is checked.
    pub async fn fire_event(
        &self,
        event_type: &str,
        payload: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        let url = self.api_url(&format!("events/{event_type}"))?;
        debug!(%url, "POST");

        let resp = self
            .http
            .post(url)
            .bearer_auth(self.token.expose_secret())
            .json(payload)
            .send()
            .await?;

        Self::check_status(resp.status(), || String::new())?;
        Ok(())
    }

    // ── Request plumbing ─────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/{path}`.
    fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/api/{path}"))?)
    }

    /// Send a GET request and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        Self::check_status(status, || body.clone())?;

        serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    /// Map a non-success status onto the matching [`Error`] variant.
    fn check_status(status: StatusCode, body: impl FnOnce() -> String) -> Result<(), Error> {
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Authentication {
                message: "access token rejected".into(),
            });
        }
        let body = body();
        Err(Error::Api {
            status: status.as_u16(),
            message: body[..body.len().min(200)].to_owned(),
        })
    }
}
