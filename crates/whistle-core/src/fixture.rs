//! Matches and the officiating roles on them.

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};
use uuid::Uuid;

use crate::{Error, Result, grade::Grade};

/// Every match is booked for the same length of time.
pub const MATCH_DURATION_MINUTES: i64 = 90;

// ─── Role ────────────────────────────────────────────────────────────────────

/// One of the four officiating slots on a match.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
  AsRefStr,
  EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
  Referee,
  #[serde(rename = "ar1")]
  #[strum(serialize = "ar1")]
  AssistantReferee1,
  #[serde(rename = "ar2")]
  #[strum(serialize = "ar2")]
  AssistantReferee2,
  Commissioner,
}

impl Role {
  /// Assistant roles are graded on the official's AR grade.
  pub fn is_assistant(self) -> bool {
    matches!(self, Self::AssistantReferee1 | Self::AssistantReferee2)
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_ref())
  }
}

impl FromStr for Role {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().to_ascii_lowercase();
    Role::iter()
      .find(|role| {
        let name: &str = role.as_ref();
        name == wanted
      })
      .ok_or_else(|| Error::UnknownRole(s.to_string()))
  }
}

// ─── Match ───────────────────────────────────────────────────────────────────

/// A scheduled match as supplied by the host system.
///
/// Each role slot holds at most one official.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
  pub match_id:        Uuid,
  pub date:            NaiveDate,
  #[serde(with = "kickoff_format")]
  pub kickoff:         NaiveTime,
  #[serde(default)]
  pub division:        String,
  #[serde(default)]
  pub district:        String,
  /// Explicit expected grade; overrides anything derived from `division`.
  #[serde(default)]
  pub expected_grade:  Option<Grade>,
  #[serde(default)]
  pub venue_id:        Option<String>,
  #[serde(default)]
  pub home_team_id:    Option<Uuid>,
  #[serde(default)]
  pub away_team_id:    Option<Uuid>,
  #[serde(default)]
  pub referee_id:      Option<Uuid>,
  #[serde(default)]
  pub ar1_id:          Option<Uuid>,
  #[serde(default)]
  pub ar2_id:          Option<Uuid>,
  #[serde(default)]
  pub commissioner_id: Option<Uuid>,
}

impl Match {
  /// A match with no division, teams, venue or officials.
  pub fn new(match_id: Uuid, date: NaiveDate, kickoff: NaiveTime) -> Self {
    Self {
      match_id,
      date,
      kickoff,
      division: String::new(),
      district: String::new(),
      expected_grade: None,
      venue_id: None,
      home_team_id: None,
      away_team_id: None,
      referee_id: None,
      ar1_id: None,
      ar2_id: None,
      commissioner_id: None,
    }
  }

  pub fn official_for(&self, role: Role) -> Option<Uuid> {
    match role {
      Role::Referee => self.referee_id,
      Role::AssistantReferee1 => self.ar1_id,
      Role::AssistantReferee2 => self.ar2_id,
      Role::Commissioner => self.commissioner_id,
    }
  }

  pub fn set_official(&mut self, role: Role, official_id: Option<Uuid>) {
    let slot = match role {
      Role::Referee => &mut self.referee_id,
      Role::AssistantReferee1 => &mut self.ar1_id,
      Role::AssistantReferee2 => &mut self.ar2_id,
      Role::Commissioner => &mut self.commissioner_id,
    };
    *slot = official_id;
  }

  /// Roles on this match currently held by `official_id`, in slot order.
  pub fn roles_held_by(&self, official_id: Uuid) -> Vec<Role> {
    Role::iter()
      .filter(|role| self.official_for(*role) == Some(official_id))
      .collect()
  }

  pub fn involves_team(&self, team_id: Uuid) -> bool {
    self.home_team_id == Some(team_id) || self.away_team_id == Some(team_id)
  }
}

// ─── Kickoff format ──────────────────────────────────────────────────────────

/// Parse a kickoff time written as `HH:MM` or `HH:MM:SS`.
pub fn parse_kickoff(raw: &str) -> Result<NaiveTime> {
  let raw = raw.trim();
  NaiveTime::parse_from_str(raw, "%H:%M")
    .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
    .map_err(|_| Error::InvalidKickoff(raw.to_string()))
}

/// Serde adapter: kickoff times travel as `"HH:MM"`, or `"HH:MM:SS"` when
/// the seconds are not zero.
mod kickoff_format {
  use chrono::{NaiveTime, Timelike};
  use serde::{Deserialize, Deserializer, Serializer, de};

  pub fn serialize<S: Serializer>(
    time: &NaiveTime,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    let pattern = if time.second() == 0 { "%H:%M" } else { "%H:%M:%S" };
    serializer.collect_str(&time.format(pattern))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    super::parse_kickoff(&raw).map_err(de::Error::custom)
  }
}
