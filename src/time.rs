use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// Timestamp wraps chrono::DateTime for the unix-second values the API
/// returns (`fpurge_ts`, `expires_on`, ...).
///
/// Deserializes from an integer, a float or a numeric string; serializes back
/// to an integer number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a DateTime
    pub fn new(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }

    /// Create a Timestamp from unix seconds, None if out of range
    pub fn from_unix(unix: i64) -> Option<Self> {
        Utc.timestamp_opt(unix, 0).single().map(Timestamp)
    }

    /// Get the unix timestamp in seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(t: Timestamp) -> Self {
        t.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.unix())
    }
}

struct TimestampVisitor;

impl TimestampVisitor {
    fn from_seconds<E: de::Error>(unix: i64) -> Result<Timestamp, E> {
        Timestamp::from_unix(unix)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", unix)))
    }
}

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unix timestamp in seconds")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        Self::from_seconds(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        let unix =
            i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {}", v)))?;
        Self::from_seconds(unix)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
        Self::from_seconds(v.trunc() as i64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
        let trimmed = v.trim();
        if let Ok(unix) = trimmed.parse::<i64>() {
            return Self::from_seconds(unix);
        }
        match trimmed.parse::<f64>() {
            Ok(secs) => self.visit_f64(secs),
            Err(_) => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_serialization() {
        let time = Timestamp::from_unix(1597242491).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "1597242491");
    }

    #[test]
    fn test_timestamp_deserialization() {
        let time: Timestamp = serde_json::from_str("1597242491").unwrap();
        assert_eq!(time.unix(), 1597242491);

        let time: Timestamp = serde_json::from_str("\"1597242491\"").unwrap();
        assert_eq!(time.unix(), 1597242491);

        let time: Timestamp = serde_json::from_str("1597242491.75").unwrap();
        assert_eq!(time.unix(), 1597242491);
    }

    #[test]
    fn test_timestamp_invalid() {
        assert!(serde_json::from_str::<Timestamp>("\"tomorrow\"").is_err());
        assert!(serde_json::from_str::<Timestamp>("true").is_err());
    }

    #[test]
    fn test_timestamp_null() {
        let result: Result<Option<Timestamp>, _> = serde_json::from_str("null");
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }
}
