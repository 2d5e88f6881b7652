//! Conflict-of-interest checks against recently officiated teams.

use chrono::{Days, NaiveDate};
use uuid::Uuid;
use whistle_core::fixture::Match;

pub const DEFAULT_WINDOW_DAYS: u32 = 14;

/// True only when both venue ids are present, non-empty and identical.
pub fn same_venue(a: Option<&str>, b: Option<&str>) -> bool {
  match (a, b) {
    (Some(a), Some(b)) => !a.is_empty() && a == b,
    _ => false,
  }
}

/// Looks back over historical match rows.
#[derive(Debug, Clone, Copy)]
pub struct RecencyGuard<'a> {
  history: &'a [Match],
}

impl<'a> RecencyGuard<'a> {
  pub fn new(history: &'a [Match]) -> Self { Self { history } }

  /// Whether `official_id` held any role on a match involving either team
  /// fewer than `window_days` days before `match_date`. Neither the
  /// candidate's own day nor the day exactly `window_days` back counts.
  pub fn had_team_recently(
    &self,
    official_id: Uuid,
    home_team_id: Option<Uuid>,
    away_team_id: Option<Uuid>,
    match_date: NaiveDate,
    window_days: u32,
  ) -> bool {
    let teams: Vec<Uuid> =
      [home_team_id, away_team_id].into_iter().flatten().collect();
    if teams.is_empty() || window_days == 0 {
      return false;
    }
    let boundary = match_date
      .checked_sub_days(Days::new(window_days.into()))
      .unwrap_or(NaiveDate::MIN);

    self.history.iter().any(|m| {
      m.date > boundary
        && m.date < match_date
        && !m.roles_held_by(official_id).is_empty()
        && teams.iter().any(|team| m.involves_team(*team))
    })
  }
}
