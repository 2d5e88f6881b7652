//! Assignments: one official holding one role on one match.
//!
//! Assignments are never stored on their own. They are read off the role
//! slots of match rows whenever a schedule needs to be scanned.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::fixture::{Match, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
  pub official_id: Uuid,
  pub match_id:    Uuid,
  pub role:        Role,
  pub date:        NaiveDate,
  pub kickoff:     NaiveTime,
  pub venue_id:    Option<String>,
}

impl Assignment {
  /// Expand the filled role slots of `m`, in slot order (referee, AR1, AR2,
  /// commissioner).
  pub fn from_match(m: &Match) -> Vec<Assignment> {
    Role::iter()
      .filter_map(|role| {
        m.official_for(role).map(|official_id| Assignment {
          official_id,
          match_id: m.match_id,
          role,
          date: m.date,
          kickoff: m.kickoff,
          venue_id: m.venue_id.clone(),
        })
      })
      .collect()
  }
}
