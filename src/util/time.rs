//! Server timestamps.
//!
//! All timestamps are local time truncated to whole seconds and rendered as
//! `YYYY-MM-DD HH:MM:SS`.

use chrono::{Local, NaiveDateTime, Timelike};

/// Wire format for every timestamp the crate emits.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current local time with sub-second precision dropped.
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Formats a timestamp using [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter rendering `NaiveDateTime` fields as `YYYY-MM-DD HH:MM:SS`.
pub mod serde_timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{format_timestamp, TIMESTAMP_FORMAT};

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}
