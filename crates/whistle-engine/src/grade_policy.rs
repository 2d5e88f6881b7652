//! Division → expected grade lookup.
//!
//! Division labels arrive as free text typed by league administrators
//! ("Ereklasse Dames", "ereklasse-dames", "2e  Klasse"). Labels are
//! normalised before any comparison, then resolved against the policy table
//! first and a list of substring heuristics second.

use serde::{Deserialize, Serialize};
use whistle_core::{fixture::Match, grade::Grade};

/// Substring heuristics applied when the table has no exact entry.
///
/// Phrases are matched longest first, so "ereklasse dames" is tried before
/// the bare "ereklasse" it contains.
pub const DEFAULT_HEURISTICS: &[(&str, Grade)] = &[
  ("ereklasse dames", Grade::B),
  ("ereklasse", Grade::A),
  ("eredivisie", Grade::A),
  ("hoofdklasse", Grade::A),
  ("eerste klasse", Grade::B),
  ("1e klasse", Grade::B),
  ("tweede klasse", Grade::C),
  ("2e klasse", Grade::C),
  ("derde klasse", Grade::D),
  ("3e klasse", Grade::D),
  ("vierde klasse", Grade::D),
  ("4e klasse", Grade::D),
  ("veteranen", Grade::D),
  ("jeugd", Grade::D),
];

/// Trim, lowercase, turn dashes and underscores into spaces and collapse
/// runs of whitespace.
pub fn normalize_division_label(label: &str) -> String {
  let replaced: String = label
    .chars()
    .map(|c| match c {
      '-' | '\u{2013}' | '\u{2014}' | '_' => ' ',
      other => other,
    })
    .collect();
  replaced
    .to_lowercase()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}

/// One row of the host's division policy table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyEntry {
  pub division: String,
  pub grade:    Grade,
}

/// Ordered division table plus fallback heuristics.
#[derive(Debug, Clone)]
pub struct GradePolicy {
  /// Normalised key → grade, in table order.
  table:      Vec<(String, Grade)>,
  /// Normalised phrase → grade, longest phrase first.
  heuristics: Vec<(String, Grade)>,
}

impl Default for GradePolicy {
  fn default() -> Self { Self::new(std::iter::empty::<(&str, Grade)>()) }
}

impl GradePolicy {
  /// Build a policy from `(division, grade)` rows using
  /// [`DEFAULT_HEURISTICS`]. When two rows normalise to the same key the
  /// first one wins.
  pub fn new<I, S>(entries: I) -> Self
  where
    I: IntoIterator<Item = (S, Grade)>,
    S: AsRef<str>,
  {
    let table = entries
      .into_iter()
      .map(|(division, grade)| {
        (normalize_division_label(division.as_ref()), grade)
      })
      .collect();
    Self { table, heuristics: Vec::new() }
      .with_heuristics(DEFAULT_HEURISTICS.iter().copied())
  }

  pub fn from_entries(entries: &[PolicyEntry]) -> Self {
    Self::new(entries.iter().map(|e| (e.division.as_str(), e.grade)))
  }

  /// Replace the substring heuristics.
  pub fn with_heuristics<I, S>(mut self, heuristics: I) -> Self
  where
    I: IntoIterator<Item = (S, Grade)>,
    S: AsRef<str>,
  {
    let mut heuristics: Vec<(String, Grade)> = heuristics
      .into_iter()
      .map(|(phrase, grade)| (normalize_division_label(phrase.as_ref()), grade))
      .filter(|(phrase, _)| !phrase.is_empty())
      .collect();
    // Stable: equal-length phrases keep their given order.
    heuristics.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    self.heuristics = heuristics;
    self
  }

  /// The grade expected for `division`, or [`Grade::Unranked`] when nothing
  /// matches.
  pub fn expected_grade(&self, division: &str) -> Grade {
    let key = normalize_division_label(division);
    if key.is_empty() {
      return Grade::Unranked;
    }

    if let Some((_, grade)) = self.table.iter().find(|(k, _)| *k == key) {
      return *grade;
    }

    self
      .heuristics
      .iter()
      .find(|(phrase, _)| key.contains(phrase.as_str()))
      .map(|(_, grade)| *grade)
      .unwrap_or(Grade::Unranked)
  }

  /// The rank a match expects. An explicit grade on the match wins over
  /// anything derived from its division.
  pub fn expected_grade_rank(&self, m: &Match) -> i32 {
    match m.expected_grade {
      Some(grade) if grade.is_ranked() => grade.rank(),
      _ => self.expected_grade(&m.division).rank(),
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::{NaiveDate, NaiveTime};
  use uuid::Uuid;

  use super::*;

  fn fixture(division: &str, expected: Option<Grade>) -> Match {
    let mut m = Match::new(
      Uuid::new_v4(),
      NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
      NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
    );
    m.division = division.into();
    m.expected_grade = expected;
    m
  }

  #[test]
  fn normalizes_case_dashes_and_spacing() {
    for raw in [
      "  Ereklasse   Dames ",
      "ereklasse-dames",
      "Ereklasse\u{2013}Dames",
      "ereklasse\u{2014}dames",
      "EREKLASSE_DAMES",
    ] {
      assert_eq!(normalize_division_label(raw), "ereklasse dames", "{raw:?}");
    }
    assert_eq!(normalize_division_label("a - b"), "a b");
    assert_eq!(normalize_division_label(""), "");
  }

  #[test]
  fn ladies_top_flight_resolves_before_top_flight() {
    let policy = GradePolicy::default();
    assert_eq!(policy.expected_grade("Ereklasse Dames"), Grade::B);
    assert_eq!(policy.expected_grade("ereklasse-dames"), Grade::B);
    assert_eq!(policy.expected_grade("Ereklasse"), Grade::A);
    assert_eq!(policy.expected_grade("Ereklasse Heren Play-offs"), Grade::A);
  }

  #[test]
  fn heuristic_order_does_not_depend_on_input_order() {
    let policy = GradePolicy::default().with_heuristics([
      ("ereklasse", Grade::A),
      ("ereklasse dames", Grade::B),
    ]);
    assert_eq!(policy.expected_grade("Ereklasse Dames"), Grade::B);
  }

  #[test]
  fn exact_table_entry_beats_heuristics() {
    let policy = GradePolicy::new([("Ereklasse Dames", Grade::A)]);
    assert_eq!(policy.expected_grade("ereklasse_dames"), Grade::A);
  }

  #[test]
  fn first_duplicate_table_key_wins() {
    let policy = GradePolicy::new([
      ("Tweede Klasse", Grade::B),
      ("tweede-klasse", Grade::D),
    ]);
    assert_eq!(policy.expected_grade("Tweede klasse"), Grade::B);
  }

  #[test]
  fn unknown_division_is_unranked() {
    let policy = GradePolicy::default();
    assert_eq!(policy.expected_grade("Recreanten"), Grade::Unranked);
    assert_eq!(policy.expected_grade("   "), Grade::Unranked);
  }

  #[test]
  fn explicit_grade_wins_over_division() {
    let policy = GradePolicy::default();
    let m = fixture("Ereklasse", Some(Grade::C));
    assert_eq!(policy.expected_grade_rank(&m), 2);
  }

  #[test]
  fn division_used_without_explicit_grade() {
    let policy = GradePolicy::default();
    assert_eq!(policy.expected_grade_rank(&fixture("Ereklasse", None)), 4);
    assert_eq!(
      policy.expected_grade_rank(&fixture("Ereklasse", Some(Grade::Unranked))),
      4
    );
    assert_eq!(policy.expected_grade_rank(&fixture("Recreanten", None)), 0);
  }

  #[test]
  fn builds_from_policy_rows() {
    let rows: Vec<PolicyEntry> = serde_json::from_str(
      r#"[{ "division": "Beker", "grade": "C" }]"#,
    )
    .unwrap();
    let policy = GradePolicy::from_entries(&rows);
    assert_eq!(policy.expected_grade("BEKER"), Grade::C);
  }
}
