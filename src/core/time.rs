use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Zone used when the panel does not configure one.
pub const DEFAULT_TIME_ZONE: &str = "browser";

/// Currently visible time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    #[must_use]
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Builds a range from epoch milliseconds. Unrepresentable inputs fall back to the epoch.
    #[must_use]
    pub fn from_millis(from_ms: i64, to_ms: i64) -> Self {
        let at = |ms| DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default();
        Self::new(at(from_ms), at(to_ms))
    }

    #[must_use]
    pub fn span_millis(self) -> i64 {
        (self.to - self.from).num_milliseconds()
    }
}

/// Time zones rendered on the x axis. One zone is by far the common case.
pub type TimeZones = SmallVec<[String; 1]>;

/// Time-zone option as configured: one zone or a list of zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeZoneOption {
    Single(String),
    Many(Vec<String>),
}

impl Default for TimeZoneOption {
    fn default() -> Self {
        Self::Single(DEFAULT_TIME_ZONE.to_owned())
    }
}

impl From<&str> for TimeZoneOption {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for TimeZoneOption {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl TimeZoneOption {
    /// Normalizes into the list form the plot builder expects.
    ///
    /// A single zone becomes a one-element list; a list passes through
    /// unchanged. Zone names are not validated.
    #[must_use]
    pub fn to_list(&self) -> TimeZones {
        match self {
            Self::Single(zone) => smallvec![zone.clone()],
            Self::Many(zones) => zones.iter().cloned().collect(),
        }
    }
}
