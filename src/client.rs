use crate::error::{CloudFlareError, Result};
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Endpoint of the client ("user") JSON API
pub const CLIENT_API_URL: &str = "https://www.cloudflare.com/api_json.html";

/// Endpoint of the host gateway API
pub const HOST_API_URL: &str = "https://api.cloudflare.com/host-gw.html";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Create the HTTP client used for API requests.
///
/// The timeout bounds the whole exchange, so a stalled read fails with a
/// transport error instead of hanging the caller.
pub fn create_http_client(config: &Config) -> Result<Client> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(CloudFlareError::ClientBuild)
}

/// Configuration for the CloudFlare API client
#[derive(Debug, Clone)]
pub struct Config {
    /// Client API endpoint
    pub client_url: String,
    /// Host API endpoint
    pub host_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            client_url: CLIENT_API_URL.to_string(),
            host_url: HOST_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with the given endpoints
    pub fn new(client_url: String, host_url: String) -> Self {
        Config {
            client_url,
            host_url,
            ..Config::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the client API endpoint
    pub fn with_client_url(mut self, url: impl Into<String>) -> Self {
        self.client_url = url.into();
        self
    }

    /// Override the host API endpoint
    pub fn with_host_url(mut self, url: impl Into<String>) -> Self {
        self.host_url = url.into();
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.client_url, "https://www.cloudflare.com/api_json.html");
        assert_eq!(config.host_url, "https://api.cloudflare.com/host-gw.html");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.user_agent.starts_with("cloudflare-client/"));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::new(
            "http://localhost:8080/client".to_string(),
            "http://localhost:8080/host".to_string(),
        )
        .with_timeout(Duration::from_millis(250))
        .with_user_agent("probe/1.0");

        assert_eq!(config.client_url, "http://localhost:8080/client");
        assert_eq!(config.host_url, "http://localhost:8080/host");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.user_agent, "probe/1.0");
    }
}
