//! The engine's answer for one (official, match, role) candidate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fixture::Role;

/// How incompatible a candidate is with the official's other commitments.
///
/// Variants are declared in ascending severity so `Ord` compares severity.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConflictClass {
  #[default]
  None,
  /// Another commitment within two days, or a weekend limit is exceeded.
  Yellow,
  /// Another, non-overlapping match on the same day.
  Orange,
  /// Overlapping kickoff windows on the same day.
  Red,
}

impl ConflictClass {
  pub fn is_none(self) -> bool { self == Self::None }
}

/// Composite verdict. Consumers map `conflict_class` to a badge colour and
/// use `available` to grey out or hide the official in a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
  pub official_id:     Uuid,
  pub match_id:        Uuid,
  pub role:            Role,
  pub conflict_class:  ConflictClass,
  /// Empty when `conflict_class` is `none`.
  pub reason:          String,
  pub available:       bool,
  pub recent_conflict: bool,
  /// Official rank minus expected rank; negative means under-qualified.
  pub fit_delta:       i32,
  /// Another same-day commitment is at the candidate's venue.
  pub same_venue:      bool,
}
