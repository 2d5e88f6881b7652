//! Per-batch evaluation state.
//!
//! A context is built for one batch of candidate checks and dropped
//! afterwards. Nothing in it outlives the batch, so the host can run several
//! batches side by side, one context each.

use std::{cell::RefCell, collections::HashMap};

use whistle_core::{fixture::Match, grade::Grade};

use crate::{
  config::EngineConfig,
  grade_policy::GradePolicy,
  schedule::ScheduleIndex,
};

pub struct EvaluationContext<'a> {
  pub policy:  &'a GradePolicy,
  pub index:   ScheduleIndex,
  /// Past matches consulted for conflicts of interest.
  pub history: &'a [Match],
  pub config:  EngineConfig,
  /// Raw division label → expected grade.
  grade_memo:  RefCell<HashMap<String, Grade>>,
}

impl<'a> EvaluationContext<'a> {
  pub fn new(
    policy: &'a GradePolicy,
    index: ScheduleIndex,
    history: &'a [Match],
    config: EngineConfig,
  ) -> Self {
    Self {
      policy,
      index,
      history,
      config,
      grade_memo: RefCell::new(HashMap::new()),
    }
  }

  /// Use `matches` both as the schedule to scan and as recency history.
  pub fn from_matches(
    policy: &'a GradePolicy,
    matches: &'a [Match],
    config: EngineConfig,
  ) -> Self {
    Self::new(policy, ScheduleIndex::from_matches(matches), matches, config)
  }

  /// Division lookup through the batch memo.
  pub fn expected_grade(&self, division: &str) -> Grade {
    if let Some(grade) = self.grade_memo.borrow().get(division) {
      return *grade;
    }
    let grade = self.policy.expected_grade(division);
    self.grade_memo.borrow_mut().insert(division.to_string(), grade);
    grade
  }

  /// Same precedence as [`GradePolicy::expected_grade_rank`].
  pub fn expected_grade_rank(&self, m: &Match) -> i32 {
    match m.expected_grade {
      Some(grade) if grade.is_ranked() => grade.rank(),
      _ => self.expected_grade(&m.division).rank(),
    }
  }

  pub fn memoized_divisions(&self) -> usize { self.grade_memo.borrow().len() }
}
