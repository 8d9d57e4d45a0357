use crate::api::CloudFlare;
use crate::error::Result;
use crate::request::{DnsRecord, OneOrMany, Operation};
use serde_json::Value;

impl CloudFlare {
    /// Current stats and settings of a zone.
    ///
    /// `interval` selects the period;
    /// [`DEFAULT_STATS_INTERVAL`](crate::DEFAULT_STATS_INTERVAL) is the last 30 days.
    /// Intervals 100, 110 and 120 are Pro only.
    pub fn stats(&self, zone: &str, interval: u32) -> Result<Value> {
        self.execute(&Operation::Stats {
            zone: zone.to_string(),
            interval,
        })
    }

    /// Set the basic security level (help, high, med, low, eoff).
    ///
    /// Accepts a [`SecurityLevel`](crate::request::SecurityLevel) or any string;
    /// the value is forwarded without validation.
    pub fn set_security_level(&self, zone: &str, level: impl AsRef<str>) -> Result<Value> {
        self.execute(&Operation::SetSecurityLevel {
            zone: zone.to_string(),
            level: level.as_ref().to_string(),
        })
    }

    /// Set the caching level (agg, basic)
    pub fn set_cache_level(&self, zone: &str, level: impl AsRef<str>) -> Result<Value> {
        self.execute(&Operation::SetCacheLevel {
            zone: zone.to_string(),
            level: level.as_ref().to_string(),
        })
    }

    /// Toggle development mode. Once on, it expires after three hours
    /// (`expires_on` in the response).
    pub fn devmode(&self, zone: &str, enabled: bool) -> Result<Value> {
        self.execute(&Operation::DevMode {
            zone: zone.to_string(),
            enabled,
        })
    }

    /// Purge every cached file of the zone. Returns `fpurge_ts` and `cooldown`.
    pub fn purge_cache(&self, zone: &str) -> Result<Value> {
        self.execute(&Operation::PurgeCache {
            zone: zone.to_string(),
        })
    }

    /// Purge a single file. HTTP and HTTPS versions must be purged separately.
    pub fn purge_zone_file(&self, zone: &str, file_url: &str) -> Result<Value> {
        self.execute(&Operation::PurgeZoneFile {
            zone: zone.to_string(),
            url: file_url.to_string(),
        })
    }

    /// Check which zones are active under the account.
    ///
    /// Accepts a list or an already comma-joined string.
    pub fn zone_check(&self, zones: impl Into<OneOrMany>) -> Result<Value> {
        self.execute(&Operation::ZoneCheck {
            zones: zones.into(),
        })
    }

    /// Recent IPs hitting the zone.
    ///
    /// `hours` defaults to [`DEFAULT_IP_HOURS`](crate::DEFAULT_IP_HOURS) (max 48);
    /// `geo` adds coordinates.
    pub fn zone_ips(
        &self,
        zone: &str,
        class: impl AsRef<str>,
        hours: u32,
        geo: bool,
    ) -> Result<Value> {
        self.execute(&Operation::ZoneIps {
            zone: zone.to_string(),
            class: class.as_ref().to_string(),
            hours,
            geo,
        })
    }

    /// Refresh the snapshot used on the challenge page (once per zone per day)
    pub fn update_image(&self, zone_id: &str) -> Result<Value> {
        self.execute(&Operation::UpdateImage {
            zone_id: zone_id.to_string(),
        })
    }

    pub fn whitelist(&self, ip: &str) -> Result<Value> {
        self.execute(&Operation::Whitelist { ip: ip.to_string() })
    }

    pub fn blacklist(&self, ip: &str) -> Result<Value> {
        self.execute(&Operation::Blacklist { ip: ip.to_string() })
    }

    /// Create a DNS record
    pub fn add_record(&self, zone: &str, record: DnsRecord) -> Result<Value> {
        self.execute(&Operation::AddRecord {
            zone: zone.to_string(),
            record,
        })
    }

    /// Delete a DNS record.
    ///
    /// The remote deletes every record sharing the target's name, without
    /// confirmation. Names are matched fully qualified (`sub.example.com`).
    pub fn delete_record(&self, zone: &str, id: &str) -> Result<Value> {
        self.execute(&Operation::DeleteRecord {
            zone: zone.to_string(),
            id: id.to_string(),
        })
    }

    /// Purge the preloader cache for an IP. Can take up to an hour.
    pub fn preloader_purge(&self, ip: &str) -> Result<Value> {
        self.execute(&Operation::PreloaderPurge { ip: ip.to_string() })
    }

    /// Edit an existing DNS record
    pub fn update_record(&self, zone: &str, id: &str, record: DnsRecord) -> Result<Value> {
        self.execute(&Operation::UpdateRecord {
            zone: zone.to_string(),
            id: id.to_string(),
            record,
        })
    }

    /// Threat score of an IP; scores grow logarithmically
    pub fn threat_score(&self, ip: &str) -> Result<Value> {
        self.execute(&Operation::ThreatScore { ip: ip.to_string() })
    }

    pub fn toggle_ipv6(&self, zone: &str, enabled: bool) -> Result<Value> {
        self.execute(&Operation::ToggleIpv6 {
            zone: zone.to_string(),
            enabled,
        })
    }
}
