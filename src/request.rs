use crate::credentials::Mode;
use indexmap::IndexMap;
use url::form_urlencoded;

/// Default interval for [`Operation::Stats`] (last 30 days)
pub const DEFAULT_STATS_INTERVAL: u32 = 20;

/// Default look-back window for [`Operation::ZoneIps`], in hours
pub const DEFAULT_IP_HOURS: u32 = 24;

/// TTL value meaning "automatic"
pub const AUTOMATIC_TTL: u32 = 1;

/// Ordered mapping of wire field name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(IndexMap<&'static str, String>);

impl Fields {
    pub fn new() -> Self {
        Fields(IndexMap::new())
    }

    /// Insert a field, replacing any previous value under the same key
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    /// Insert a field only when a value is present
    pub fn insert_opt(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Encode as an `application/x-www-form-urlencoded` body
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Wire encoding of a boolean-coded field
pub fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// A single pre-joined string or a list of strings, sent comma-joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Wire form: lists are joined with `,`, a single string is passed through
    pub fn encode(&self) -> String {
        match self {
            OneOrMany::One(value) => value.clone(),
            OneOrMany::Many(values) => values.join(","),
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(values: &[&str]) -> Self {
        OneOrMany::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<&[String]> for OneOrMany {
    fn from(values: &[String]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(values: [&str; N]) -> Self {
        OneOrMany::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Basic security level for [`Operation::SetSecurityLevel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
    /// "I'm under attack"
    Help,
    High,
    Medium,
    Low,
    /// Essentially off
    EssentiallyOff,
}

impl AsRef<str> for SecurityLevel {
    fn as_ref(&self) -> &str {
        match self {
            SecurityLevel::Help => "help",
            SecurityLevel::High => "high",
            SecurityLevel::Medium => "med",
            SecurityLevel::Low => "low",
            SecurityLevel::EssentiallyOff => "eoff",
        }
    }
}

/// Caching level for [`Operation::SetCacheLevel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLevel {
    Aggressive,
    Basic,
}

impl AsRef<str> for CacheLevel {
    fn as_ref(&self) -> &str {
        match self {
            CacheLevel::Aggressive => "agg",
            CacheLevel::Basic => "basic",
        }
    }
}

/// Visitor classification for [`Operation::ZoneIps`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpClass {
    Regular,
    Crawler,
    Threat,
}

impl AsRef<str> for IpClass {
    fn as_ref(&self) -> &str {
        match self {
            IpClass::Regular => "r",
            IpClass::Crawler => "s",
            IpClass::Threat => "t",
        }
    }
}

/// DNS record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Spf,
    Ns,
    Srv,
    Loc,
}

impl AsRef<str> for RecordType {
    fn as_ref(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Txt => "TXT",
            RecordType::Spf => "SPF",
            RecordType::Ns => "NS",
            RecordType::Srv => "SRV",
            RecordType::Loc => "LOC",
        }
    }
}

/// DNS record contents for [`Operation::AddRecord`] and [`Operation::UpdateRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub record_type: String,
    pub name: String,
    pub content: String,
    /// [`AUTOMATIC_TTL`] or a number of seconds; not range-checked
    pub ttl: u32,
    /// Whether traffic is proxied through CloudFlare (orange cloud)
    pub proxied: bool,
}

impl DnsRecord {
    /// Create a record with automatic TTL and proxying off
    pub fn new(
        record_type: impl AsRef<str>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        DnsRecord {
            record_type: record_type.as_ref().to_string(),
            name: name.into(),
            content: content.into(),
            ttl: AUTOMATIC_TTL,
            proxied: false,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_proxied(mut self, proxied: bool) -> Self {
        self.proxied = proxied;
        self
    }

    fn encode_into(&self, fields: &mut Fields) {
        fields.insert("type", self.record_type.as_str());
        fields.insert("content", self.content.as_str());
        fields.insert("name", self.name.as_str());
        fields.insert("ttl", self.ttl.to_string());
        fields.insert("service_mode", flag(self.proxied));
    }
}

/// How [`Operation::UserLookup`] identifies the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Email(String),
    UniqueId(String),
}

/// Remote action identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Stats,
    SecurityLevel,
    CacheLevel,
    DevMode,
    FullPurge,
    ZoneFilePurge,
    ZoneCheck,
    ZoneIps,
    ZoneGrab,
    Whitelist,
    Ban,
    RecordNew,
    RecordDelete,
    PreloaderPurge,
    RecordEdit,
    IpLookup,
    Ipv46,
    UserCreate,
    ZoneSet,
    UserLookup,
    UserAuth,
    ZoneLookup,
    ZoneDelete,
}

impl Action {
    /// Wire identifier of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Stats => "stats",
            Action::SecurityLevel => "sec_lvl",
            Action::CacheLevel => "cache_lvl",
            Action::DevMode => "devmode",
            Action::FullPurge => "fpurge_ts",
            Action::ZoneFilePurge => "zone_file_purge",
            Action::ZoneCheck => "zone_check",
            Action::ZoneIps => "zone_ips",
            Action::ZoneGrab => "zone_grab",
            Action::Whitelist => "wl",
            Action::Ban => "ban",
            Action::RecordNew => "rec_new",
            Action::RecordDelete => "rec_delete",
            Action::PreloaderPurge => "pre_purge",
            Action::RecordEdit => "rec_edit",
            Action::IpLookup => "ip_lkup",
            Action::Ipv46 => "ipv46",
            Action::UserCreate => "user_create",
            Action::ZoneSet => "zone_set",
            Action::UserLookup => "user_lookup",
            Action::UserAuth => "user_auth",
            Action::ZoneLookup => "zone_lookup",
            Action::ZoneDelete => "zone_delete",
        }
    }

    /// API surface the action belongs to
    pub fn surface(&self) -> Mode {
        match self {
            Action::UserCreate
            | Action::ZoneSet
            | Action::UserLookup
            | Action::UserAuth
            | Action::ZoneLookup
            | Action::ZoneDelete => Mode::Host,
            _ => Mode::Client,
        }
    }

    /// Wire key carrying the action identifier: `a` on the client API,
    /// `act` on the host API
    pub fn key(&self) -> &'static str {
        match self.surface() {
            Mode::Client => "a",
            Mode::Host => "act",
        }
    }
}

/// A remote operation with its typed arguments.
///
/// [`Operation::encode`] yields the wire fields: the action identifier and
/// the arguments. Authentication fields are never produced here; the
/// dispatcher adds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Current stats and settings of a zone
    Stats { zone: String, interval: u32 },
    SetSecurityLevel { zone: String, level: String },
    SetCacheLevel { zone: String, level: String },
    /// Development mode bypasses the cache for three hours
    DevMode { zone: String, enabled: bool },
    /// Purge every cached file of the zone
    PurgeCache { zone: String },
    PurgeZoneFile { zone: String, url: String },
    /// Check which zones are active under the account
    ZoneCheck { zones: OneOrMany },
    ZoneIps {
        zone: String,
        class: String,
        hours: u32,
        geo: bool,
    },
    /// Refresh the challenge page snapshot
    UpdateImage { zone_id: String },
    Whitelist { ip: String },
    Blacklist { ip: String },
    AddRecord { zone: String, record: DnsRecord },
    /// Delete records by id; the remote removes every record sharing the name
    DeleteRecord { zone: String, id: String },
    PreloaderPurge { ip: String },
    UpdateRecord {
        zone: String,
        id: String,
        record: DnsRecord,
    },
    ThreatScore { ip: String },
    ToggleIpv6 { zone: String, enabled: bool },
    CreateUser {
        email: String,
        password: String,
        username: Option<String>,
        unique_id: Option<String>,
    },
    /// CNAME setup; replaces any previous setup of the zone
    AddZone {
        user_key: String,
        zone: String,
        resolve_to: String,
        subdomains: OneOrMany,
    },
    UserLookup { by: UserLookup },
    UserAuth {
        email: String,
        password: String,
        unique_id: Option<String>,
    },
    ZoneLookup { user_key: String, zone: String },
    DeleteZone { user_key: String, zone: String },
}

impl Operation {
    pub fn action(&self) -> Action {
        match self {
            Operation::Stats { .. } => Action::Stats,
            Operation::SetSecurityLevel { .. } => Action::SecurityLevel,
            Operation::SetCacheLevel { .. } => Action::CacheLevel,
            Operation::DevMode { .. } => Action::DevMode,
            Operation::PurgeCache { .. } => Action::FullPurge,
            Operation::PurgeZoneFile { .. } => Action::ZoneFilePurge,
            Operation::ZoneCheck { .. } => Action::ZoneCheck,
            Operation::ZoneIps { .. } => Action::ZoneIps,
            Operation::UpdateImage { .. } => Action::ZoneGrab,
            Operation::Whitelist { .. } => Action::Whitelist,
            Operation::Blacklist { .. } => Action::Ban,
            Operation::AddRecord { .. } => Action::RecordNew,
            Operation::DeleteRecord { .. } => Action::RecordDelete,
            Operation::PreloaderPurge { .. } => Action::PreloaderPurge,
            Operation::UpdateRecord { .. } => Action::RecordEdit,
            Operation::ThreatScore { .. } => Action::IpLookup,
            Operation::ToggleIpv6 { .. } => Action::Ipv46,
            Operation::CreateUser { .. } => Action::UserCreate,
            Operation::AddZone { .. } => Action::ZoneSet,
            Operation::UserLookup { .. } => Action::UserLookup,
            Operation::UserAuth { .. } => Action::UserAuth,
            Operation::ZoneLookup { .. } => Action::ZoneLookup,
            Operation::DeleteZone { .. } => Action::ZoneDelete,
        }
    }

    /// Encode the operation into its wire fields, action identifier first
    pub fn encode(&self) -> Fields {
        let action = self.action();
        let mut fields = Fields::new();
        fields.insert(action.key(), action.as_str());

        match self {
            Operation::Stats { zone, interval } => {
                fields.insert("z", zone.as_str());
                fields.insert("interval", interval.to_string());
            }
            Operation::SetSecurityLevel { zone, level }
            | Operation::SetCacheLevel { zone, level } => {
                fields.insert("z", zone.as_str());
                fields.insert("v", level.as_str());
            }
            Operation::DevMode { zone, enabled } | Operation::ToggleIpv6 { zone, enabled } => {
                fields.insert("z", zone.as_str());
                fields.insert("v", flag(*enabled));
            }
            Operation::PurgeCache { zone } => {
                fields.insert("z", zone.as_str());
                fields.insert("v", "1");
            }
            Operation::PurgeZoneFile { zone, url } => {
                fields.insert("z", zone.as_str());
                fields.insert("url", url.as_str());
            }
            Operation::ZoneCheck { zones } => {
                fields.insert("zones", zones.encode());
            }
            Operation::ZoneIps {
                zone,
                class,
                hours,
                geo,
            } => {
                fields.insert("z", zone.as_str());
                fields.insert("hours", hours.to_string());
                fields.insert("class", class.as_str());
                fields.insert("geo", flag(*geo));
            }
            Operation::UpdateImage { zone_id } => {
                fields.insert("zid", zone_id.as_str());
            }
            Operation::Whitelist { ip } | Operation::Blacklist { ip } => {
                fields.insert("key", ip.as_str());
            }
            Operation::AddRecord { zone, record } => {
                fields.insert("z", zone.as_str());
                record.encode_into(&mut fields);
            }
            Operation::DeleteRecord { zone, id } => {
                fields.insert("z", zone.as_str());
                fields.insert("id", id.as_str());
            }
            Operation::PreloaderPurge { ip } => {
                fields.insert("zone_name", ip.as_str());
            }
            Operation::UpdateRecord { zone, id, record } => {
                fields.insert("z", zone.as_str());
                fields.insert("id", id.as_str());
                record.encode_into(&mut fields);
            }
            Operation::ThreatScore { ip } => {
                fields.insert("ip", ip.as_str());
            }
            Operation::CreateUser {
                email,
                password,
                username,
                unique_id,
            } => {
                fields.insert("cloudflare_email", email.as_str());
                fields.insert("cloudflare_pass", password.as_str());
                fields.insert_opt("cloudflare_username", username.as_deref());
                fields.insert_opt("unique_id", unique_id.as_deref());
            }
            Operation::AddZone {
                user_key,
                zone,
                resolve_to,
                subdomains,
            } => {
                fields.insert("user_key", user_key.as_str());
                fields.insert("zone_name", zone.as_str());
                fields.insert("resolve_to", resolve_to.as_str());
                fields.insert("subdomains", subdomains.encode());
            }
            Operation::UserLookup { by } => match by {
                UserLookup::Email(email) => fields.insert("cloudflare_email", email.as_str()),
                UserLookup::UniqueId(id) => fields.insert("unique_id", id.as_str()),
            },
            Operation::UserAuth {
                email,
                password,
                unique_id,
            } => {
                fields.insert("cloudflare_email", email.as_str());
                fields.insert("cloudflare_pass", password.as_str());
                fields.insert_opt("unique_id", unique_id.as_deref());
            }
            Operation::ZoneLookup { user_key, zone } | Operation::DeleteZone { user_key, zone } => {
                fields.insert("user_key", user_key.as_str());
                fields.insert("zone_name", zone.as_str());
            }
        }

        fields
    }
}
