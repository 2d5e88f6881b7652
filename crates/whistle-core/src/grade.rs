//! Qualification grades.
//!
//! Grades are letters A (highest) through D. Anything else an upstream row
//! may carry (`E`, an empty string, a missing column) collapses into
//! [`Grade::Unranked`], which ranks 0 and never asserts a fit preference.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An official's qualification level, or a match's expected level.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
  A,
  B,
  C,
  D,
  /// No grade recorded, or the explicit "unqualified" letter `E`.
  #[default]
  Unranked,
}

impl Grade {
  /// Integer rank used for fit comparisons: A=4, B=3, C=2, D=1, unranked=0.
  pub fn rank(self) -> i32 {
    match self {
      Self::A => 4,
      Self::B => 3,
      Self::C => 2,
      Self::D => 1,
      Self::Unranked => 0,
    }
  }

  pub fn is_ranked(self) -> bool { self != Self::Unranked }

  /// The single-letter form; unranked renders as an empty string.
  pub fn letter(self) -> &'static str {
    match self {
      Self::A => "A",
      Self::B => "B",
      Self::C => "C",
      Self::D => "D",
      Self::Unranked => "",
    }
  }
}

impl fmt::Display for Grade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Unranked => f.write_str("unranked"),
      other => f.write_str(other.letter()),
    }
  }
}

impl FromStr for Grade {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_uppercase().as_str() {
      "A" => Ok(Self::A),
      "B" => Ok(Self::B),
      "C" => Ok(Self::C),
      "D" => Ok(Self::D),
      "" | "E" => Ok(Self::Unranked),
      _ => Err(Error::UnknownGrade(s.to_string())),
    }
  }
}

impl TryFrom<String> for Grade {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { value.parse() }
}

impl From<Grade> for String {
  fn from(grade: Grade) -> Self { grade.letter().to_string() }
}
