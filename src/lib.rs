//! # cloudflare-client - CloudFlare client and host API for Rust
//!
//! A blocking client for the CloudFlare client API (user key + email) and
//! host gateway API (reseller host key). Each remote action is exposed as a
//! typed method; arguments are encoded into the form fields the service
//! expects and the JSON response is returned as-is.
//!
//! ## Features
//!
//! - Two authentication modes selected by the credentials:
//!   - client mode sends `tkn` and `u` to the client API endpoint
//!   - host mode sends `host_key` to the host gateway endpoint
//! - Typed request encoding, see [`Operation`]
//! - Uniform error type for transport and decode failures
//! - Optional envelope helpers for inspecting `result`, `msg` and `err_code`
//!
//! Enumerated values (security level, cache level, IP class, record type)
//! accept the typed enums from [`request`] or any string; they are forwarded
//! without validation.
//!
//! Errors reported by the API itself (bad zone, rate limit, ...) arrive as a
//! successful JSON value. Use [`Response::check`] to turn them into errors.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use cloudflare_client::{CloudFlare, Response, DEFAULT_STATS_INTERVAL};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cf = CloudFlare::client("user-api-key", "user@example.com")?;
//!
//!     let stats = cf.stats("example.com", DEFAULT_STATS_INTERVAL)?;
//!     let response = Response::from_value(stats)?.check()?;
//!
//!     println!("{:?}", response.get("result/objs/0/trafficBreakdown"));
//!     Ok(())
//! }
//! ```
//!
//! ## Host API
//!
//! ```no_run
//! use cloudflare_client::{CloudFlare, UserLookup};
//!
//! let cf = CloudFlare::host("host-key")?;
//! let user = cf.user_lookup(UserLookup::UniqueId("customer-42".to_string()))?;
//! # Ok::<(), cloudflare_client::CloudFlareError>(())
//! ```
//!
//! ## Configuration
//!
//! ```no_run
//! use cloudflare_client::{CloudFlare, Config, Credentials};
//! use std::time::Duration;
//!
//! let config = Config::default().with_timeout(Duration::from_secs(10));
//! let cf = CloudFlare::with_config(Credentials::host("host-key"), config)?;
//! # Ok::<(), cloudflare_client::CloudFlareError>(())
//! ```

pub mod api;
pub mod client;
pub mod client_api;
pub mod credentials;
pub mod error;
pub mod host_api;
pub mod request;
pub mod response;
pub mod time;

// Re-export main types for convenience
pub use api::{CloudFlare, PreparedRequest};
pub use client::{Config, CLIENT_API_URL, DEFAULT_TIMEOUT, HOST_API_URL};
pub use credentials::{Credentials, Mode};
pub use error::{CloudFlareError, FaultKind, Result};
pub use request::{
    flag, Action, CacheLevel, DnsRecord, Fields, IpClass, OneOrMany, Operation, RecordType,
    SecurityLevel, UserLookup, AUTOMATIC_TTL, DEFAULT_IP_HOURS, DEFAULT_STATS_INTERVAL,
};
pub use response::Response;
pub use time::Timestamp;

// Re-export serde_json for convenience
pub use serde_json::{json, Value};
