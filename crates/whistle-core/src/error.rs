//! Error types for `whistle-core`.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown grade letter: {0:?}")]
  UnknownGrade(String),

  #[error("unknown role: {0:?}")]
  UnknownRole(String),

  #[error("date range ends ({end}) before it starts ({start})")]
  InvertedDateRange { start: NaiveDate, end: NaiveDate },

  #[error("invalid kickoff time: {0:?}")]
  InvalidKickoff(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
