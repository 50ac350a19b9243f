//! Clan war domain models.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections::BTreeMap, fmt, path::PathBuf, str::FromStr};

use crate::{
    error::{war::WarError, AppError},
    model::id::ClanId,
    util::{
        parse::{lenient_i64, parse_i64_from_string},
        time::serde_timestamp,
    },
};

/// How long a war accepts results after it starts.
pub const WAR_DURATION_DAYS: i64 = 2;

const WAR_ID_PREFIX: &str = "war-";

/// Formats the war id for a war number, e.g. `war-12`.
pub fn war_id_for(number: i64) -> String {
    format!("{WAR_ID_PREFIX}{number}")
}

/// Parses the war number back out of a war id.
///
/// # Returns
/// - `Ok(i64)` - Number of the war
/// - `Err(AppError::InternalErr(ParseId))` - The id was not issued by [`war_id_for`]
pub fn war_number(war_id: &str) -> Result<i64, AppError> {
    parse_i64_from_string(war_id.strip_prefix(WAR_ID_PREFIX).unwrap_or(war_id))
}

/// A clan's current war entry in the war summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarState {
    #[serde(skip)]
    pub clan_id: ClanId,
    #[serde(rename = "war-id")]
    pub war_id: String,
    #[serde(rename = "start-time", with = "serde_timestamp")]
    pub start_time: NaiveDateTime,
}

impl WarState {
    pub fn from_entity(entity: entity::clan_war::Model) -> Self {
        Self {
            clan_id: ClanId(entity.clan_id),
            war_id: entity.war_id,
            start_time: entity.start_time,
        }
    }

    /// The first instant at which the war no longer counts as active.
    pub fn ends_at(&self) -> NaiveDateTime {
        self.start_time + Duration::days(WAR_DURATION_DAYS)
    }

    /// Whether the war's window has elapsed at `now`.
    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        now >= self.ends_at()
    }
}

/// Result of starting a war.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarStart {
    pub war_id: String,
    /// Directory holding the war's mutable map records.
    pub history_path: PathBuf,
    #[serde(with = "serde_timestamp")]
    pub start_time: NaiveDateTime,
}

/// Aggregated score and usage counter of one map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MapTally {
    pub stars: i64,
    pub cnt: i64,
}

/// Per-map tallies of a war, keyed by map id.
pub type WarOverview = BTreeMap<String, MapTally>;

/// Validated map identifier; used verbatim as a record file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(String);

impl MapId {
    /// Record file name of this map, e.g. `map1.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl FromStr for MapId {
    type Err = WarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(WarError::InvalidMapId(s.to_string()))
        }
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form map record stored in a war's history directory.
///
/// Only `stars` and `cnt` carry meaning for the crate; every other field is
/// stored and returned untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarMapRecord(pub Map<String, Value>);

impl WarMapRecord {
    pub fn stars(&self) -> i64 {
        lenient_i64(self.0.get("stars"))
    }

    pub fn cnt(&self) -> i64 {
        lenient_i64(self.0.get("cnt"))
    }

    /// Overwrites `cnt`, replacing whatever value the record carried.
    pub fn set_cnt(&mut self, cnt: i64) {
        self.0.insert("cnt".to_string(), Value::from(cnt));
    }

    pub fn tally(&self) -> MapTally {
        MapTally {
            stars: self.stars(),
            cnt: self.cnt(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for WarMapRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// What happens to a clan's previous war history when it starts a new war.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Move the directory under the archive root.
    #[default]
    Archive,
    /// Remove the directory.
    Delete,
    /// Leave the directory in the history root.
    Keep,
}

impl FromStr for RetentionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "archive" => Ok(Self::Archive),
            "delete" => Ok(Self::Delete),
            "keep" => Ok(Self::Keep),
            other => Err(format!(
                "expected one of 'archive', 'delete', 'keep', got '{other}'"
            )),
        }
    }
}
