//! Schedule conflict detection.
//!
//! Scans an official's existing commitments against a candidate match:
//!
//! - same day, overlapping 90-minute windows → red
//! - same day, no overlap → orange
//! - within [`PROXIMITY_DAYS`] days → yellow
//!
//! How several hits combine depends on [`ConflictPrecedence`].

use chrono::{NaiveTime, Timelike};
use tracing::trace;
use uuid::Uuid;
use whistle_core::{
  fixture::{MATCH_DURATION_MINUTES, Match},
  verdict::ConflictClass,
};

use crate::{
  config::ConflictPrecedence,
  schedule::{ScheduleEntry, ScheduleIndex},
};

/// Commitments this many days apart or closer are flagged yellow.
pub const PROXIMITY_DAYS: i64 = 2;

/// A conflict class with the human-readable reason it was raised for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictFinding {
  pub class:  ConflictClass,
  pub reason: String,
}

impl ConflictFinding {
  pub fn new(class: ConflictClass, reason: impl Into<String>) -> Self {
    Self { class, reason: reason.into() }
  }
}

/// `[start, end)` in minutes since midnight.
fn window(kickoff: NaiveTime) -> (i64, i64) {
  let start = i64::from(kickoff.num_seconds_from_midnight()) / 60;
  (start, start + MATCH_DURATION_MINUTES)
}

/// Whether two same-day kickoffs have overlapping match windows.
pub fn windows_overlap(a: NaiveTime, b: NaiveTime) -> bool {
  let (start_a, end_a) = window(a);
  let (start_b, end_b) = window(b);
  start_a < end_b && start_b < end_a
}

/// The class a single existing commitment raises against `candidate`.
fn entry_finding(
  entry: &ScheduleEntry,
  candidate: &Match,
) -> Option<ConflictFinding> {
  let days_apart = (entry.date - candidate.date).num_days();
  let when = format!("{} at {}", entry.date, entry.kickoff.format("%H:%M"));

  if days_apart == 0 {
    if windows_overlap(entry.kickoff, candidate.kickoff) {
      Some(ConflictFinding::new(
        ConflictClass::Red,
        format!("overlapping match on {when}"),
      ))
    } else {
      Some(ConflictFinding::new(
        ConflictClass::Orange,
        format!("another match on {when}"),
      ))
    }
  } else if days_apart.abs() <= PROXIMITY_DAYS {
    Some(ConflictFinding::new(
      ConflictClass::Yellow,
      format!("match within {PROXIMITY_DAYS} days on {}", entry.date),
    ))
  } else {
    None
  }
}

/// Classify `candidate` against the official's indexed commitments.
///
/// The entry for `candidate` itself is skipped, so an existing assignment
/// can be re-evaluated in place.
pub fn classify(
  official_id: Uuid,
  candidate: &Match,
  index: &ScheduleIndex,
  precedence: ConflictPrecedence,
) -> ConflictFinding {
  let mut found = ConflictFinding::default();

  for entry in index.entries(official_id) {
    if entry.match_id == candidate.match_id {
      continue;
    }
    let Some(hit) = entry_finding(entry, candidate) else {
      continue;
    };
    trace!(
      %official_id,
      existing = %entry.match_id,
      class = ?hit.class,
      "schedule entry raises conflict"
    );

    match precedence {
      ConflictPrecedence::ScanOrder => {
        if hit.class == ConflictClass::Red {
          found = hit;
          break;
        }
        if found.class.is_none() {
          found = hit;
        }
      }
      ConflictPrecedence::MaxSeverity => {
        if hit.class > found.class {
          found = hit;
        }
        if found.class == ConflictClass::Red {
          break;
        }
      }
    }
  }

  found
}
