use crate::client::{create_http_client, Config};
use crate::credentials::{Credentials, Mode};
use crate::error::{CloudFlareError, Result};
use crate::request::{Fields, Operation};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// A fully authenticated request, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub mode: Mode,
    pub url: Url,
    pub fields: Fields,
}

/// Handle on the CloudFlare client or host API.
///
/// Every operation funnels through [`CloudFlare::dispatch`], which adds the
/// authentication fields for the configured mode, POSTs the form to the
/// matching endpoint and returns the parsed JSON body. The handle holds no
/// mutable state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct CloudFlare {
    client: Client,
    credentials: Credentials,
    client_url: Url,
    host_url: Url,
}

impl CloudFlare {
    /// Create a handle with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, Config::default())
    }

    /// Create a handle for the client API (user API key and account email)
    pub fn client(api_key: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        Self::new(Credentials::client(api_key, email))
    }

    /// Create a handle for the host API (host key)
    pub fn host(host_key: impl Into<String>) -> Result<Self> {
        Self::new(Credentials::host(host_key))
    }

    /// Create a handle with custom configuration
    pub fn with_config(credentials: Credentials, config: Config) -> Result<Self> {
        let client_url = Url::parse(&config.client_url)?;
        let host_url = Url::parse(&config.host_url)?;

        Ok(CloudFlare {
            client: create_http_client(&config)?,
            credentials,
            client_url,
            host_url,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn mode(&self) -> Mode {
        self.credentials.mode()
    }

    /// Add authentication fields and select the endpoint, without any I/O
    pub fn prepare(&self, mut fields: Fields) -> PreparedRequest {
        self.credentials.apply_params(&mut fields);

        let mode = self.mode();
        let url = match mode {
            Mode::Client => self.client_url.clone(),
            Mode::Host => self.host_url.clone(),
        };

        PreparedRequest { mode, url, fields }
    }

    /// Encode and dispatch an operation
    pub fn execute(&self, operation: &Operation) -> Result<Value> {
        self.dispatch(operation.encode())
    }

    /// Send a request and return the parsed JSON body.
    ///
    /// `fields` must not carry authentication keys; they are added here.
    /// The body is parsed regardless of the HTTP status, and errors reported
    /// by the API inside the JSON are returned as `Ok`.
    pub fn dispatch(&self, fields: Fields) -> Result<Value> {
        let action = fields
            .get("a")
            .or_else(|| fields.get("act"))
            .unwrap_or("")
            .to_string();
        let request = self.prepare(fields);

        debug!(action = %action, mode = ?request.mode, url = %request.url, "sending request");

        let start = Instant::now();
        let response = self
            .client
            .post(request.url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(request.fields.to_form_body())
            .send()
            .map_err(|e| {
                warn!(action = %action, error = %e, timeout = e.is_timeout(), "request failed");
                CloudFlareError::Transport(e)
            })?;
        let status = response.status();

        let body = response.text().map_err(|e| {
            warn!(action = %action, error = %e, "failed to read response body");
            CloudFlareError::Transport(e)
        })?;

        debug!(
            action = %action,
            status = status.as_u16(),
            elapsed = ?start.elapsed(),
            "received response"
        );

        serde_json::from_str(&body).map_err(|source| {
            warn!(
                action = %action,
                status = status.as_u16(),
                error = %source,
                "response is not JSON"
            );
            CloudFlareError::Decode {
                status: status.as_u16(),
                body,
                source,
            }
        })
    }
}
