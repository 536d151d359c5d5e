use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Wall-clock instant at which a record was created.
///
/// Always held in UTC. The canonical text form is RFC 3339 with nanosecond
/// resolution and trailing fractional zeros trimmed, so
/// `2024-05-01T10:00:00.120Z` is written as `2024-05-01T10:00:00.12Z` and a
/// whole second carries no fraction at all. That text is part of every
/// record digest, so it must never change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Build from seconds and nanoseconds since the UNIX epoch.
    pub fn from_unix(secs: i64, nanos: u32) -> Result<Self, TypeError> {
        let input = || format!("{secs}.{nanos:09}");
        let at = Utc
            .timestamp_opt(secs, nanos)
            .single()
            .ok_or_else(|| TypeError::InvalidTimestamp {
                input: input(),
                reason: "out of range".into(),
            })?;
        Self::checked(at, input)
    }

    /// Parse an RFC 3339 timestamp, normalising its offset to UTC.
    ///
    /// Only the strict form is accepted: an uppercase `T` between date and
    /// time, and an uppercase `Z` or a numeric offset. Leap seconds (`:60`)
    /// are refused because they have no canonical text.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let invalid = |reason: String| TypeError::InvalidTimestamp {
            input: input.to_string(),
            reason,
        };
        if input.as_bytes().get(10) != Some(&b'T') {
            return Err(invalid("expected 'T' between date and time".into()));
        }
        if input.ends_with('z') {
            return Err(invalid("expected uppercase 'Z' offset".into()));
        }
        let at = DateTime::parse_from_rfc3339(input).map_err(|e| invalid(e.to_string()))?;
        Self::checked(at.with_timezone(&Utc), || input.to_string())
    }

    fn checked(at: DateTime<Utc>, input: impl FnOnce() -> String) -> Result<Self, TypeError> {
        // chrono stores a leap second as nanos past 999_999_999.
        if at.timestamp_subsec_nanos() >= 1_000_000_000 {
            return Err(TypeError::InvalidTimestamp {
                input: input(),
                reason: "leap seconds are not supported".into(),
            });
        }
        Ok(Self(at))
    }

    /// Canonical text encoding used for hashing and on the wire.
    pub fn to_canonical(&self) -> String {
        let seconds = self.0.format("%Y-%m-%dT%H:%M:%S");
        let nanos = self.0.timestamp_subsec_nanos();
        if nanos == 0 {
            return format!("{seconds}Z");
        }
        let fraction = format!("{nanos:09}");
        format!("{seconds}.{}Z", fraction.trim_end_matches('0'))
    }

    /// Second-precision text, used for human-facing listings.
    pub fn to_seconds_text(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.to_canonical())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
