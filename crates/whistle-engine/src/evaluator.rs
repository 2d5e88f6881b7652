//! One verdict per (official, match, role) candidate.

use tracing::{debug, warn};
use uuid::Uuid;
use whistle_core::{
  fixture::{Match, Role},
  official::Official,
  verdict::Verdict,
};

use crate::{
  Error, Result, availability, conflict,
  context::EvaluationContext,
  recency::{self, RecencyGuard},
  weekend,
};

/// Runs every check against a shared [`EvaluationContext`]. Never mutates
/// its inputs.
#[derive(Clone, Copy)]
pub struct AssignmentEvaluator<'c, 'a> {
  ctx: &'c EvaluationContext<'a>,
}

impl<'c, 'a> AssignmentEvaluator<'c, 'a> {
  pub fn new(ctx: &'c EvaluationContext<'a>) -> Self { Self { ctx } }

  pub fn evaluate(
    &self,
    official: &Official,
    candidate: &Match,
    role: Role,
  ) -> Verdict {
    let official_id = official.official_id;
    let index = &self.ctx.index;
    let precedence = self.ctx.config.precedence;

    let scan = conflict::classify(official_id, candidate, index, precedence);
    let load = weekend::check_weekend_load(
      official_id,
      candidate,
      index,
      &official.preferences,
    );
    let finding = weekend::combine(scan, load, precedence);

    let available =
      availability::is_available(official, candidate.date, candidate.kickoff);

    let recent_conflict = RecencyGuard::new(self.ctx.history).had_team_recently(
      official_id,
      candidate.home_team_id,
      candidate.away_team_id,
      candidate.date,
      self.ctx.config.recency_window_days,
    );

    let fit_delta = official.grade_for(role).rank()
      - self.ctx.expected_grade_rank(candidate);

    let same_venue = index.entries(official_id).iter().any(|e| {
      e.match_id != candidate.match_id
        && e.date == candidate.date
        && recency::same_venue(
          e.venue_id.as_deref(),
          candidate.venue_id.as_deref(),
        )
    });

    debug!(
      %official_id,
      match_id = %candidate.match_id,
      %role,
      class = ?finding.class,
      reason = %finding.reason,
      available,
      recent_conflict,
      fit_delta,
      "evaluated candidate"
    );

    Verdict {
      official_id,
      match_id: candidate.match_id,
      role,
      conflict_class: finding.class,
      reason: finding.reason,
      available,
      recent_conflict,
      fit_delta,
      same_venue,
    }
  }

  /// Look both rows up by id, then [`evaluate`](Self::evaluate).
  pub fn evaluate_by_id(
    &self,
    roster: &[Official],
    matches: &[Match],
    official_id: Uuid,
    match_id: Uuid,
    role: Role,
  ) -> Result<Verdict> {
    let Some(official) = roster.iter().find(|o| o.official_id == official_id)
    else {
      warn!(%official_id, "official not in roster");
      return Err(Error::OfficialNotFound(official_id));
    };
    let Some(candidate) = matches.iter().find(|m| m.match_id == match_id) else {
      warn!(%match_id, "match not in snapshot");
      return Err(Error::MatchNotFound(match_id));
    };
    Ok(self.evaluate(official, candidate, role))
  }

  /// Evaluate every eligible official in `roster` for `role` on `candidate`,
  /// ordered for a picker: available first, then by conflict class, then
  /// qualified before under-qualified, then closest grade fit, then id.
  ///
  /// Officials already holding a different role on this match are left out.
  pub fn rank_candidates(
    &self,
    roster: &[Official],
    candidate: &Match,
    role: Role,
  ) -> Vec<Verdict> {
    let mut verdicts: Vec<Verdict> = roster
      .iter()
      .filter(|o| {
        let held = candidate.roles_held_by(o.official_id);
        held.is_empty() || held == [role]
      })
      .map(|o| self.evaluate(o, candidate, role))
      .collect();

    verdicts.sort_by_key(|v| {
      (
        !v.available,
        v.conflict_class,
        v.fit_delta < 0,
        v.fit_delta.abs(),
        v.official_id,
      )
    });
    verdicts
  }
}
