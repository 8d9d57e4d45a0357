use crate::api::CloudFlare;
use crate::error::Result;
use crate::request::{OneOrMany, Operation, UserLookup};
use serde_json::Value;

impl CloudFlare {
    /// Create a CloudFlare account mapped to one of your users.
    ///
    /// `username` is generated remotely when omitted. `unique_id` is an alias
    /// of at most 100 ASCII characters, usually your own customer id.
    pub fn create_user(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
        unique_id: Option<&str>,
    ) -> Result<Value> {
        self.execute(&Operation::CreateUser {
            email: email.to_string(),
            password: password.to_string(),
            username: username.map(str::to_string),
            unique_id: unique_id.map(str::to_string),
        })
    }

    /// Set up a user's zone for CNAME hosting.
    ///
    /// Replaces any previous setup of the zone: `subdomains` must list every
    /// hosted subdomain, not only new ones.
    pub fn add_zone(
        &self,
        user_key: &str,
        zone: &str,
        resolve_to: &str,
        subdomains: impl Into<OneOrMany>,
    ) -> Result<Value> {
        self.execute(&Operation::AddZone {
            user_key: user_key.to_string(),
            zone: zone.to_string(),
            resolve_to: resolve_to.to_string(),
            subdomains: subdomains.into(),
        })
    }

    /// Look up a user's account by email or unique id
    pub fn user_lookup(&self, by: UserLookup) -> Result<Value> {
        self.execute(&Operation::UserLookup { by })
    }

    /// Authorize access to an existing account, optionally binding a unique id
    pub fn user_auth(&self, email: &str, password: &str, unique_id: Option<&str>) -> Result<Value> {
        self.execute(&Operation::UserAuth {
            email: email.to_string(),
            password: password.to_string(),
            unique_id: unique_id.map(str::to_string),
        })
    }

    pub fn zone_lookup(&self, user_key: &str, zone: &str) -> Result<Value> {
        self.execute(&Operation::ZoneLookup {
            user_key: user_key.to_string(),
            zone: zone.to_string(),
        })
    }

    /// Delete a zone on behalf of a user
    pub fn delete_zone(&self, user_key: &str, zone: &str) -> Result<Value> {
        self.execute(&Operation::DeleteZone {
            user_key: user_key.to_string(),
            zone: zone.to_string(),
        })
    }
}
