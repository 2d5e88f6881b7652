//! Officials, their weekly availability and scheduling preferences.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, fixture::Role, grade::Grade};

// ─── Availability records ────────────────────────────────────────────────────

/// The part of the day a kickoff falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
  Morning,
  Afternoon,
  Evening,
}

/// Recurring availability for one weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyAvailability {
  pub weekday:   Weekday,
  pub morning:   bool,
  pub afternoon: bool,
  pub evening:   bool,
}

impl WeeklyAvailability {
  pub fn allows(&self, part: DayPart) -> bool {
    match part {
      DayPart::Morning => self.morning,
      DayPart::Afternoon => self.afternoon,
      DayPart::Evening => self.evening,
    }
  }
}

/// An inclusive span of days on which the official cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
  pub start: NaiveDate,
  pub end:   NaiveDate,
}

impl DateRange {
  pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
    if end < start {
      return Err(Error::InvertedDateRange { start, end });
    }
    Ok(Self { start, end })
  }

  pub fn single(day: NaiveDate) -> Self { Self { start: day, end: day } }

  pub fn contains(&self, day: NaiveDate) -> bool {
    self.start <= day && day <= self.end
  }
}

// ─── Preferences ─────────────────────────────────────────────────────────────

/// Per-official weekend limits. `None` means unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendPreferences {
  #[serde(default)]
  pub max_matches_per_weekend: Option<u32>,
  #[serde(default)]
  pub max_days_per_weekend:    Option<u32>,
}

// ─── Official ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Official {
  pub official_id: Uuid,
  #[serde(default)]
  pub name:        String,
  /// Grade used for referee and commissioner roles.
  #[serde(default)]
  pub grade:       Grade,
  /// Grade used for assistant-referee roles.
  #[serde(default)]
  pub ar_grade:    Grade,
  /// At most one record per weekday is consulted; the first one wins.
  #[serde(default)]
  pub weekly:      Vec<WeeklyAvailability>,
  #[serde(default)]
  pub unavailable: Vec<DateRange>,
  #[serde(default)]
  pub preferences: WeekendPreferences,
}

impl Official {
  pub fn new(official_id: Uuid, grade: Grade) -> Self {
    Self {
      official_id,
      name: String::new(),
      grade,
      ar_grade: Grade::Unranked,
      weekly: Vec::new(),
      unavailable: Vec::new(),
      preferences: WeekendPreferences::default(),
    }
  }

  /// The grade that counts for `role`. Assistant roles fall back to the
  /// main grade when no AR grade is recorded.
  pub fn grade_for(&self, role: Role) -> Grade {
    if role.is_assistant() && self.ar_grade.is_ranked() {
      self.ar_grade
    } else {
      self.grade
    }
  }

  pub fn weekly_for(&self, weekday: Weekday) -> Option<&WeeklyAvailability> {
    self.weekly.iter().find(|w| w.weekday == weekday)
  }
}
