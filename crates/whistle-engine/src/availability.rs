//! Weekly and date-range availability.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use whistle_core::official::{DateRange, DayPart, Official};

/// Why an official cannot take a kickoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailability {
  /// The date falls inside a blocked range.
  Blocked(DateRange),
  /// The weekly record for this weekday excludes this part of the day.
  Weekly { weekday: Weekday, part: DayPart },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
  Available,
  Unavailable(Unavailability),
}

impl Availability {
  pub fn is_available(self) -> bool { matches!(self, Self::Available) }
}

/// Morning before 12:00, afternoon until 16:59, evening from 17:00.
pub fn day_part(kickoff: NaiveTime) -> DayPart {
  match kickoff.hour() {
    0..12 => DayPart::Morning,
    12..17 => DayPart::Afternoon,
    _ => DayPart::Evening,
  }
}

/// Whether `official` can take a match on `date` at `kickoff`.
///
/// Blocked ranges are checked first and take precedence over the weekly
/// pattern. A weekday with no weekly record counts as available.
pub fn check(
  official: &Official,
  date: NaiveDate,
  kickoff: NaiveTime,
) -> Availability {
  if let Some(range) = official.unavailable.iter().find(|r| r.contains(date)) {
    return Availability::Unavailable(Unavailability::Blocked(*range));
  }

  let weekday = date.weekday();
  let part = day_part(kickoff);
  match official.weekly_for(weekday) {
    Some(record) if !record.allows(part) => {
      Availability::Unavailable(Unavailability::Weekly { weekday, part })
    }
    _ => Availability::Available,
  }
}

pub fn is_available(
  official: &Official,
  date: NaiveDate,
  kickoff: NaiveTime,
) -> bool {
  check(official, date, kickoff).is_available()
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;
  use whistle_core::{grade::Grade, official::WeeklyAvailability};

  use super::*;

  fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
  }

  // 2025-06-07 is a Saturday.
  fn saturday() -> NaiveDate { NaiveDate::from_ymd_opt(2025, 6, 7).unwrap() }

  fn official_with_saturday(
    morning: bool,
    afternoon: bool,
    evening: bool,
  ) -> Official {
    let mut o = Official::new(Uuid::new_v4(), Grade::B);
    o.weekly.push(WeeklyAvailability {
      weekday: Weekday::Sat,
      morning,
      afternoon,
      evening,
    });
    o
  }

  #[test]
  fn buckets_kickoff_times() {
    assert_eq!(day_part(at(0, 0)), DayPart::Morning);
    assert_eq!(day_part(at(11, 59)), DayPart::Morning);
    assert_eq!(day_part(at(12, 0)), DayPart::Afternoon);
    assert_eq!(day_part(at(16, 59)), DayPart::Afternoon);
    assert_eq!(day_part(at(17, 0)), DayPart::Evening);
    assert_eq!(day_part(at(23, 30)), DayPart::Evening);
  }

  #[test]
  fn weekly_flag_off_is_unavailable() {
    let o = official_with_saturday(false, true, true);
    assert_eq!(
      check(&o, saturday(), at(10, 0)),
      Availability::Unavailable(Unavailability::Weekly {
        weekday: Weekday::Sat,
        part:    DayPart::Morning,
      })
    );
    assert!(is_available(&o, saturday(), at(14, 0)));
  }

  #[test]
  fn missing_weekday_record_is_available() {
    let o = official_with_saturday(false, false, false);
    let sunday = saturday().succ_opt().unwrap();
    assert!(is_available(&o, sunday, at(10, 0)));
    let unrecorded = Official::new(Uuid::new_v4(), Grade::A);
    assert!(is_available(&unrecorded, sunday, at(10, 0)));
  }

  #[test]
  fn blocked_range_overrides_weekly_yes() {
    let mut o = official_with_saturday(true, true, true);
    let range = DateRange::new(
      saturday().pred_opt().unwrap(),
      saturday().succ_opt().unwrap(),
    )
    .unwrap();
    o.unavailable.push(range);
    assert_eq!(
      check(&o, saturday(), at(14, 0)),
      Availability::Unavailable(Unavailability::Blocked(range))
    );
  }

  #[test]
  fn blocked_range_edges_are_inclusive() {
    let mut o = Official::new(Uuid::new_v4(), Grade::C);
    o.unavailable.push(DateRange::single(saturday()));
    assert!(!is_available(&o, saturday(), at(20, 0)));
    assert!(is_available(&o, saturday().succ_opt().unwrap(), at(20, 0)));
  }
}
