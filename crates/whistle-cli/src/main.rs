//! `whistle`: evaluate official assignments against a row snapshot.
//!
//! Reads engine settings from `whistle.toml` (or `--config`), then from
//! `WHISTLE_*` environment variables, then from flags, and prints verdicts
//! as JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```
//! whistle evaluate --snapshot rows.json \
//!   --official <UUID> --match <UUID> --role referee
//! whistle candidates --snapshot rows.json --match <UUID> --role ar1
//! whistle normalize "Ereklasse - Dames"
//! ```

mod snapshot;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use snapshot::Snapshot;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;
use whistle_core::{fixture::Role, grade::Grade};
use whistle_engine::{
  AssignmentEvaluator, ConflictPrecedence, EngineConfig, EvaluationContext,
  GradePolicy, ScheduleIndex, normalize_division_label,
};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Whistle assignment evaluator")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "whistle.toml")]
  config: PathBuf,

  /// How competing conflicts combine: `scan_order` or `max_severity`.
  #[arg(long)]
  precedence: Option<String>,

  /// Days searched back for recent officiating of either team.
  #[arg(long)]
  recency_window_days: Option<u32>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Evaluate one official for one role on one match.
  Evaluate {
    #[arg(short, long)]
    snapshot: PathBuf,
    #[arg(long)]
    official: Uuid,
    #[arg(long = "match")]
    match_id: Uuid,
    #[arg(long)]
    role:     Role,
  },
  /// List every eligible official for a role, best fit first.
  Candidates {
    #[arg(short, long)]
    snapshot: PathBuf,
    #[arg(long = "match")]
    match_id: Uuid,
    #[arg(long)]
    role:     Role,
  },
  /// Show how a division label normalises and which grade it expects.
  Normalize {
    label:    String,
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
  },
}

#[derive(Serialize)]
struct Normalized {
  normalized:     String,
  expected_grade: Grade,
  expected_rank:  i32,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let engine_cfg = load_config(&cli)?;
  tracing::debug!(?engine_cfg, "engine configuration");

  match cli.command {
    Command::Evaluate { snapshot, official, match_id, role } => {
      let snap = Snapshot::load(&expand_tilde(&snapshot))?;
      let policy = snap.policy();
      let history = snap.recency_rows();
      let ctx = EvaluationContext::new(
        &policy,
        ScheduleIndex::from_matches(&snap.matches),
        &history,
        engine_cfg,
      );
      let verdict = AssignmentEvaluator::new(&ctx)
        .evaluate_by_id(
          &snap.officials,
          &snap.matches,
          official,
          match_id,
          role,
        )
        .context("evaluation failed")?;
      print_json(&verdict)
    }
    Command::Candidates { snapshot, match_id, role } => {
      let snap = Snapshot::load(&expand_tilde(&snapshot))?;
      let candidate = snap
        .matches
        .iter()
        .find(|m| m.match_id == match_id)
        .with_context(|| format!("match not found: {match_id}"))?;
      let policy = snap.policy();
      let history = snap.recency_rows();
      let ctx = EvaluationContext::new(
        &policy,
        ScheduleIndex::from_matches(&snap.matches),
        &history,
        engine_cfg,
      );
      let ranked = AssignmentEvaluator::new(&ctx)
        .rank_candidates(&snap.officials, candidate, role);
      tracing::info!(
        %match_id,
        %role,
        candidates = ranked.len(),
        "ranked candidates"
      );
      print_json(&ranked)
    }
    Command::Normalize { label, snapshot } => {
      let policy = match snapshot {
        Some(path) => Snapshot::load(&expand_tilde(&path))?.policy(),
        None => GradePolicy::default(),
      };
      let expected_grade = policy.expected_grade(&label);
      print_json(&Normalized {
        normalized: normalize_division_label(&label),
        expected_grade,
        expected_rank: expected_grade.rank(),
      })
    }
  }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Layer file, environment and flags into an [`EngineConfig`].
fn load_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
  let precedence = cli
    .precedence
    .as_deref()
    .map(parse_precedence)
    .transpose()?;

  let settings = config::Config::builder()
    .add_source(config::File::from(expand_tilde(&cli.config)).required(false))
    .add_source(config::Environment::with_prefix("WHISTLE"))
    .set_override_option("precedence", precedence)
    .context("invalid --precedence")?
    .set_override_option(
      "recency_window_days",
      cli.recency_window_days.map(i64::from),
    )
    .context("invalid --recency-window-days")?
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise EngineConfig")
}

/// Validate a precedence name up front so a typo fails with a clear message.
fn parse_precedence(raw: &str) -> anyhow::Result<String> {
  let value = serde_json::Value::String(raw.to_string());
  let parsed: ConflictPrecedence = serde_json::from_value(value)
    .with_context(|| format!("unknown precedence {raw:?}"))?;
  Ok(match parsed {
    ConflictPrecedence::ScanOrder => "scan_order",
    ConflictPrecedence::MaxSeverity => "max_severity",
  }
  .to_string())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
  let out =
    serde_json::to_string_pretty(value).context("failed to encode output")?;
  println!("{out}");
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn precedence_names_are_validated() {
    assert_eq!(parse_precedence("max_severity").unwrap(), "max_severity");
    assert_eq!(parse_precedence("scan_order").unwrap(), "scan_order");
    assert!(parse_precedence("loudest").is_err());
  }

  #[test]
  fn flags_override_defaults() {
    let cli = Cli::parse_from([
      "whistle",
      "--config",
      "/nonexistent/whistle.toml",
      "--precedence",
      "max_severity",
      "--recency-window-days",
      "21",
      "normalize",
      "Ereklasse",
    ]);
    let cfg = load_config(&cli).unwrap();
    assert_eq!(cfg.precedence, ConflictPrecedence::MaxSeverity);
    assert_eq!(cfg.recency_window_days, 21);
  }

  #[test]
  fn plain_paths_are_untouched() {
    let p = Path::new("/tmp/rows.json");
    assert_eq!(expand_tilde(p), PathBuf::from("/tmp/rows.json"));
  }
}
