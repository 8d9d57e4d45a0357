use crate::request::Fields;

/// Wire key carrying the user API key in client mode
pub const TOKEN_FIELD: &str = "tkn";
/// Wire key carrying the account email in client mode
pub const USER_FIELD: &str = "u";
/// Wire key carrying the host key in host mode
pub const HOST_KEY_FIELD: &str = "host_key";

/// Which API surface a set of credentials talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// End-user API key plus account email, client API endpoint
    Client,
    /// Reseller host key, host gateway endpoint
    Host,
}

/// Credentials select both the endpoint and the authentication fields
/// injected into every request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// User API key and the email of the account it belongs to
    Client { api_key: String, email: String },
    /// Host API key
    Host { host_key: String },
}

impl Credentials {
    /// Credentials for the client API
    pub fn client(api_key: impl Into<String>, email: impl Into<String>) -> Self {
        Credentials::Client {
            api_key: api_key.into(),
            email: email.into(),
        }
    }

    /// Credentials for the host API
    pub fn host(host_key: impl Into<String>) -> Self {
        Credentials::Host {
            host_key: host_key.into(),
        }
    }

    /// Build credentials from a key and an optional email; the presence of
    /// the email selects client mode.
    pub fn from_parts(api_key: impl Into<String>, email: Option<String>) -> Self {
        match email {
            Some(email) => Credentials::client(api_key, email),
            None => Credentials::host(api_key),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Credentials::Client { .. } => Mode::Client,
            Credentials::Host { .. } => Mode::Host,
        }
    }

    /// Add the authentication fields for this mode.
    ///
    /// Existing values under the authentication keys are replaced.
    pub fn apply_params(&self, fields: &mut Fields) {
        match self {
            Credentials::Client { api_key, email } => {
                fields.insert(TOKEN_FIELD, api_key.clone());
                fields.insert(USER_FIELD, email.clone());
            }
            Credentials::Host { host_key } => {
                fields.insert(HOST_KEY_FIELD, host_key.clone());
            }
        }
    }
}

// Implement Debug manually to avoid exposing the key
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Client { email, .. } => f
                .debug_struct("Client")
                .field("api_key", &"<redacted>")
                .field("email", email)
                .finish(),
            Credentials::Host { .. } => f
                .debug_struct("Host")
                .field("host_key", &"<redacted>")
                .finish(),
        }
    }
}
