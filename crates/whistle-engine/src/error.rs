//! Error type for `whistle-engine`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The caller asked for an official that is not in the supplied roster.
  #[error("official not found: {0}")]
  OfficialNotFound(uuid::Uuid),

  #[error("match not found: {0}")]
  MatchNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
