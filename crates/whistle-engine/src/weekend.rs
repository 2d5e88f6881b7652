//! Weekend workload limits.
//!
//! Weekends are grouped by ISO (year, week). Saturday and Sunday of one
//! weekend always share an ISO week since ISO weeks start on Monday.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use uuid::Uuid;
use whistle_core::{
  fixture::Match,
  official::WeekendPreferences,
  verdict::ConflictClass,
};

use crate::{
  config::ConflictPrecedence,
  conflict::ConflictFinding,
  schedule::{ScheduleEntry, ScheduleIndex},
};

/// Hard cap on matches per weekend, independent of preferences.
pub const MAX_WEEKEND_MATCHES: usize = 3;

pub fn is_weekend(date: NaiveDate) -> bool {
  matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// ISO (year, week-number) of `date`.
pub fn week_key(date: NaiveDate) -> (i32, u32) {
  let week = date.iso_week();
  (week.year(), week.week())
}

/// Check the candidate against the official's weekend load.
///
/// Returns `None` for weekday matches and when no limit is hit. Limits are
/// tried in order: the hard cap, then a one-match-per-weekend preference,
/// then a one-day-per-weekend preference. Preferences other than 1 are not
/// enforced.
pub fn check_weekend_load(
  official_id: Uuid,
  candidate: &Match,
  index: &ScheduleIndex,
  preferences: &WeekendPreferences,
) -> Option<ConflictFinding> {
  if !is_weekend(candidate.date) {
    return None;
  }
  let key = week_key(candidate.date);

  let same_weekend: Vec<&ScheduleEntry> = index
    .entries(official_id)
    .iter()
    .filter(|e| e.match_id != candidate.match_id)
    .filter(|e| is_weekend(e.date) && week_key(e.date) == key)
    .collect();
  let count = same_weekend.len();

  if count >= MAX_WEEKEND_MATCHES {
    return Some(ConflictFinding::new(
      ConflictClass::Yellow,
      format!("exceeds {MAX_WEEKEND_MATCHES} matches per weekend"),
    ));
  }

  if preferences.max_matches_per_weekend == Some(1) && count >= 1 {
    return Some(ConflictFinding::new(
      ConflictClass::Yellow,
      "exceeds max 1 match per weekend",
    ));
  }

  if preferences.max_days_per_weekend == Some(1) {
    let days: BTreeSet<NaiveDate> =
      same_weekend.iter().map(|e| e.date).collect();
    if !days.is_empty() && !days.contains(&candidate.date) {
      return Some(ConflictFinding::new(
        ConflictClass::Yellow,
        "exceeds max 1 day per weekend",
      ));
    }
  }

  None
}

/// Fold a weekend-load hit into the schedule-scan finding.
///
/// Under [`ConflictPrecedence::ScanOrder`] the load hit replaces the scan
/// result outright, even a red one.
pub fn combine(
  scan: ConflictFinding,
  load: Option<ConflictFinding>,
  precedence: ConflictPrecedence,
) -> ConflictFinding {
  match (load, precedence) {
    (None, _) => scan,
    (Some(load), ConflictPrecedence::ScanOrder) => load,
    (Some(load), ConflictPrecedence::MaxSeverity) => {
      if load.class > scan.class { load } else { scan }
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveTime;

  use super::*;

  // 2025-06-07 is a Saturday; ISO week 23.
  fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
  }

  fn fixture(month: u32, day: u32, hour: u32) -> Match {
    Match::new(
      Uuid::new_v4(),
      date(month, day),
      NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
    )
  }

  fn index_for(official: Uuid, existing: &[Match]) -> ScheduleIndex {
    let rows: Vec<Match> = existing
      .iter()
      .cloned()
      .map(|mut m| {
        m.referee_id = Some(official);
        m
      })
      .collect();
    ScheduleIndex::from_matches(&rows)
  }

  fn prefs(matches: Option<u32>, days: Option<u32>) -> WeekendPreferences {
    WeekendPreferences {
      max_matches_per_weekend: matches,
      max_days_per_weekend:    days,
    }
  }

  /// Load check for `candidate` against `existing`, all refereed by one
  /// official.
  fn load(
    existing: &[Match],
    candidate: &Match,
    preferences: WeekendPreferences,
  ) -> Option<ConflictFinding> {
    let official = Uuid::new_v4();
    let index = index_for(official, existing);
    check_weekend_load(official, candidate, &index, &preferences)
  }

  #[test]
  fn weekend_predicate_and_week_key() {
    assert!(is_weekend(date(6, 7)));
    assert!(is_weekend(date(6, 8)));
    assert!(!is_weekend(date(6, 6)));
    assert!(!is_weekend(date(6, 9)));
    assert_eq!(week_key(date(6, 7)), week_key(date(6, 8)));
    assert_ne!(week_key(date(6, 8)), week_key(date(6, 14)));
    // 2027-01-02 (Saturday) belongs to ISO week 53 of 2026.
    let new_year = NaiveDate::from_ymd_opt(2027, 1, 2).unwrap();
    assert_eq!(week_key(new_year), (2026, 53));
  }

  #[test]
  fn weekday_candidates_are_not_checked() {
    let existing = [fixture(6, 7, 10), fixture(6, 7, 14), fixture(6, 8, 10)];
    let candidate = fixture(6, 6, 19);
    assert!(load(&existing, &candidate, prefs(Some(1), Some(1))).is_none());
  }

  #[test]
  fn three_weekend_matches_hit_the_hard_cap() {
    let existing = [
      fixture(6, 7, 10),
      fixture(6, 7, 14),
      fixture(6, 8, 10),
      // Other weekend, ignored.
      fixture(6, 14, 10),
    ];
    let candidate = fixture(6, 8, 16);
    let hit = load(&existing, &candidate, prefs(None, None)).unwrap();
    assert_eq!(hit.class, ConflictClass::Yellow);
    assert_eq!(hit.reason, "exceeds 3 matches per weekend");
  }

  #[test]
  fn two_weekend_matches_pass_without_preferences() {
    let existing = [fixture(6, 7, 10), fixture(6, 8, 10)];
    let candidate = fixture(6, 8, 16);
    assert!(load(&existing, &candidate, prefs(None, None)).is_none());
  }

  #[test]
  fn one_match_per_weekend_preference() {
    let candidate = fixture(6, 7, 14);
    let hit =
      load(&[fixture(6, 8, 10)], &candidate, prefs(Some(1), None)).unwrap();
    assert_eq!(hit.reason, "exceeds max 1 match per weekend");

    assert!(load(&[], &candidate, prefs(Some(1), None)).is_none());
  }

  #[test]
  fn one_day_per_weekend_allows_same_day() {
    let existing = [fixture(6, 7, 10)];

    let same_day = fixture(6, 7, 16);
    assert!(load(&existing, &same_day, prefs(None, Some(1))).is_none());

    let other_day = fixture(6, 8, 16);
    let hit = load(&existing, &other_day, prefs(None, Some(1))).unwrap();
    assert_eq!(hit.class, ConflictClass::Yellow);
    assert_eq!(hit.reason, "exceeds max 1 day per weekend");
  }

  #[test]
  fn preferences_other_than_one_are_not_enforced() {
    let existing = [fixture(6, 7, 10), fixture(6, 8, 10)];
    let candidate = fixture(6, 8, 18);
    assert!(load(&existing, &candidate, prefs(Some(2), None)).is_none());
    assert!(load(&existing, &candidate, prefs(None, Some(2))).is_none());
    assert!(load(&existing, &candidate, prefs(Some(0), Some(0))).is_none());
  }

  #[test]
  fn candidate_is_not_counted_against_itself() {
    let candidate = fixture(6, 7, 14);
    let existing = std::slice::from_ref(&candidate);
    assert!(load(existing, &candidate, prefs(Some(1), Some(1))).is_none());
  }

  #[test]
  fn scan_order_lets_load_replace_red() {
    let red = ConflictFinding::new(ConflictClass::Red, "overlapping match");
    let load = ConflictFinding::new(
      ConflictClass::Yellow,
      "exceeds 3 matches per weekend",
    );

    let literal =
      combine(red.clone(), Some(load.clone()), ConflictPrecedence::ScanOrder);
    assert_eq!(literal, load);

    let severest = combine(
      red.clone(),
      Some(load.clone()),
      ConflictPrecedence::MaxSeverity,
    );
    assert_eq!(severest, red);

    let raised = combine(
      ConflictFinding::default(),
      Some(load.clone()),
      ConflictPrecedence::MaxSeverity,
    );
    assert_eq!(raised, load);

    let untouched = combine(red.clone(), None, ConflictPrecedence::ScanOrder);
    assert_eq!(untouched, red);
  }
}
