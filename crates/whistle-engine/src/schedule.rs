//! Per-official schedule index.
//!
//! Built once per evaluation batch from the assignment rows the host
//! supplies. Entry order per official follows input order; the conflict scan
//! depends on it.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;
use whistle_core::{
  assignment::Assignment,
  fixture::{Match, Role},
};

/// One existing commitment of an official.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
  pub match_id: Uuid,
  pub role:     Role,
  pub date:     NaiveDate,
  pub kickoff:  NaiveTime,
  pub venue_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
  by_official: HashMap<Uuid, Vec<ScheduleEntry>>,
}

impl ScheduleIndex {
  pub fn from_assignments<'a, I>(assignments: I) -> Self
  where
    I: IntoIterator<Item = &'a Assignment>,
  {
    let mut by_official: HashMap<Uuid, Vec<ScheduleEntry>> = HashMap::new();
    for a in assignments {
      by_official.entry(a.official_id).or_default().push(ScheduleEntry {
        match_id: a.match_id,
        role:     a.role,
        date:     a.date,
        kickoff:  a.kickoff,
        venue_id: a.venue_id.clone(),
      });
    }
    Self { by_official }
  }

  /// Index every filled role slot, in row order then slot order.
  pub fn from_matches(matches: &[Match]) -> Self {
    let assignments: Vec<Assignment> =
      matches.iter().flat_map(Assignment::from_match).collect();
    Self::from_assignments(&assignments)
  }

  /// The official's commitments; empty if they have none.
  pub fn entries(&self, official_id: Uuid) -> &[ScheduleEntry] {
    self
      .by_official
      .get(&official_id)
      .map(Vec::as_slice)
      .unwrap_or_default()
  }

  pub fn official_count(&self) -> usize { self.by_official.len() }
}
