//! Assignment evaluation engine for Whistle.
//!
//! Given a candidate (official, match, role) and the rows the host system
//! already holds, decides whether the booking is safe, risky or disallowed
//! and how well the official's grade fits the match. Pure synchronous; no
//! storage, HTTP or clock access.
//!
//! # Quick start
//!
//! ```no_run
//! use whistle_core::{
//!   fixture::{Match, Role},
//!   grade::Grade,
//!   official::Official,
//! };
//! use whistle_engine::{
//!   AssignmentEvaluator, EngineConfig, EvaluationContext, GradePolicy,
//! };
//!
//! # fn rows() -> (Vec<Match>, Official, Match) { unimplemented!() }
//! let (season, official, candidate) = rows();
//! let policy = GradePolicy::new([("Ereklasse", Grade::A)]);
//! let config = EngineConfig::default();
//! let ctx = EvaluationContext::from_matches(&policy, &season, config);
//! let evaluator = AssignmentEvaluator::new(&ctx);
//! let verdict = evaluator.evaluate(&official, &candidate, Role::Referee);
//! println!("{:?} {}", verdict.conflict_class, verdict.reason);
//! ```

pub mod availability;
pub mod config;
pub mod conflict;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod grade_policy;
pub mod recency;
pub mod schedule;
pub mod weekend;

pub use config::{ConflictPrecedence, EngineConfig};
pub use conflict::ConflictFinding;
pub use context::EvaluationContext;
pub use error::{Error, Result};
pub use evaluator::AssignmentEvaluator;
pub use grade_policy::{GradePolicy, PolicyEntry, normalize_division_label};
pub use recency::RecencyGuard;
pub use schedule::{ScheduleEntry, ScheduleIndex};
