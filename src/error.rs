use crate::response::Response;
use thiserror::Error;

/// Broad category of a [`CloudFlareError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Connection, TLS, timeout or body read failure
    Transport,
    /// Response body was received but is not JSON
    Decode,
    /// Invalid configuration detected while building a client
    Config,
    /// Error reported by the remote API inside a successful response
    Remote,
}

/// Main error type for CloudFlare API operations
#[derive(Debug, Error)]
pub enum CloudFlareError {
    /// HTTP transport error (connect, TLS, timeout, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be parsed as JSON
    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Envelope payload does not match the requested type, see [`Response::apply`]
    #[error("failed to decode response payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// Endpoint URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Error returned by the remote API, see [`Response::check`]
    #[error("CloudFlare API error: {message}")]
    Api {
        message: String,
        code: Option<String>,
        response: Box<Response>,
    },
}

impl CloudFlareError {
    /// Create a new API error from an error envelope
    pub fn from_response(response: Response) -> Self {
        let message = response
            .msg
            .clone()
            .unwrap_or_else(|| "unknown error".to_string());
        let code = response.error_code();

        CloudFlareError::Api {
            message,
            code,
            response: Box::new(response),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> FaultKind {
        match self {
            CloudFlareError::Transport(_) => FaultKind::Transport,
            CloudFlareError::Decode { .. } | CloudFlareError::Payload(_) => FaultKind::Decode,
            CloudFlareError::UrlParse(_) | CloudFlareError::ClientBuild(_) => FaultKind::Config,
            CloudFlareError::Api { .. } => FaultKind::Remote,
        }
    }

    /// Check if the request ran past the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, CloudFlareError::Transport(e) if e.is_timeout())
    }

    /// Check if the remote API rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CloudFlareError::Api { code: Some(code), .. } if code == "E_UNAUTH")
    }

    /// HTTP status of the response, when one was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CloudFlareError::Transport(e) => e.status().map(|s| s.as_u16()),
            CloudFlareError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for CloudFlare operations
pub type Result<T> = std::result::Result<T, CloudFlareError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn error_envelope(msg: Option<&str>, code: Option<&str>) -> Response {
        let mut value = serde_json::json!({"result": "error"});
        if let Some(msg) = msg {
            value["msg"] = msg.into();
        }
        if let Some(code) = code {
            value["err_code"] = code.into();
        }
        Response::from_value(value).unwrap()
    }

    #[test]
    fn test_error_from_response() {
        let error = CloudFlareError::from_response(error_envelope(
            Some("Invalid zone"),
            Some("E_INVLDINPUT"),
        ));

        assert_eq!(error.kind(), FaultKind::Remote);
        assert_eq!(error.to_string(), "CloudFlare API error: Invalid zone");
        match error {
            CloudFlareError::Api { code, .. } => assert_eq!(code.as_deref(), Some("E_INVLDINPUT")),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_unauthorized() {
        let error = CloudFlareError::from_response(error_envelope(None, Some("E_UNAUTH")));
        assert!(error.is_unauthorized());
        assert!(error.to_string().contains("unknown error"));
    }

    #[test]
    fn test_decode_error_kind() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = CloudFlareError::Decode {
            status: 502,
            body: "<html>".to_string(),
            source,
        };

        assert_eq!(error.kind(), FaultKind::Decode);
        assert_eq!(error.status_code(), Some(502));
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_url_parse_is_config() {
        let error: CloudFlareError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(error.kind(), FaultKind::Config);
    }
}
