use crate::error::{CloudFlareError, Result};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response is an optional typed view over the envelope the API wraps its
/// payloads in.
///
/// Dispatch returns the raw JSON; use [`Response::from_value`] to inspect the
/// `result`, `msg` and `err_code` fields and to navigate the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// "success" or "error"
    pub result: String,

    /// Echo of the request parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,

    /// Response payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,

    /// Error message (if result is "error")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    /// Error code (if result is "error"), usually a string such as `E_UNAUTH`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err_code: Option<Value>,
}

impl Response {
    /// Interpret a dispatched JSON value as an envelope
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn is_success(&self) -> bool {
        self.result == "success"
    }

    pub fn is_error(&self) -> bool {
        self.result == "error"
    }

    /// Error code as a string, whether the API sent it as a string or a number
    pub fn error_code(&self) -> Option<String> {
        match self.err_code.as_ref()? {
            Value::String(code) => Some(code.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Turn an error envelope into [`CloudFlareError::Api`]
    pub fn check(self) -> Result<Self> {
        if self.is_error() {
            return Err(CloudFlareError::from_response(self));
        }
        Ok(self)
    }

    /// Apply unmarshals the response payload into the provided type
    pub fn apply<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let payload = self.response.clone().unwrap_or(Value::Null);
        serde_json::from_value(payload).map_err(CloudFlareError::Payload)
    }

    /// Get a value from the response payload by a slash-separated path.
    /// For example, "result/objs/0/zone_name" walks into objects and arrays.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = self.response.as_ref()?;

        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(arr) => {
                    let index: usize = part.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string value from the response payload by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }

    /// Get a unix timestamp from the response payload by a slash-separated path
    pub fn get_time(&self, path: &str) -> Option<Timestamp> {
        self.get(path).and_then(|v| Timestamp::deserialize(v.clone()).ok())
    }
}
