//! The JSON row snapshot handed over by the host system.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;
use whistle_core::{fixture::Match, official::Official};
use whistle_engine::{GradePolicy, PolicyEntry};

/// Everything one evaluation batch needs, as exported by the host.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
  /// Current schedule; scanned for conflicts and weekend load.
  #[serde(default)]
  pub matches:      Vec<Match>,
  #[serde(default)]
  pub officials:    Vec<Official>,
  #[serde(default)]
  pub grade_policy: Vec<PolicyEntry>,
  /// Older matches consulted only for conflicts of interest.
  #[serde(default)]
  pub history:      Vec<Match>,
}

impl Snapshot {
  pub fn from_json(raw: &str) -> anyhow::Result<Self> {
    serde_json::from_str(raw).context("failed to parse snapshot JSON")
  }

  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    Self::from_json(&raw)
      .with_context(|| format!("in snapshot {}", path.display()))
  }

  pub fn policy(&self) -> GradePolicy {
    GradePolicy::from_entries(&self.grade_policy)
  }

  /// Past matches plus the current schedule.
  pub fn recency_rows(&self) -> Vec<Match> {
    self.history.iter().chain(&self.matches).cloned().collect()
  }
}
