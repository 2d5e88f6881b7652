//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::recency::DEFAULT_WINDOW_DAYS;

/// How competing conflict conditions combine into one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPrecedence {
  /// The first qualifying condition in schedule order wins; only red
  /// overrides an earlier class, and a weekend-load hit replaces whatever
  /// the schedule scan found.
  #[default]
  ScanOrder,
  /// The most severe detected condition wins; a weekend-load hit can only
  /// raise the class.
  MaxSeverity,
}

/// Runtime engine settings, deserialised from the host's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
  pub precedence:          ConflictPrecedence,
  /// Trailing days searched for recent officiating of either team.
  pub recency_window_days: u32,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      precedence:          ConflictPrecedence::default(),
      recency_window_days: DEFAULT_WINDOW_DAYS,
    }
  }
}
