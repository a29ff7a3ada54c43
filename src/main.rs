mod cli;

use chrono::{DateTime, Utc};
use clap::Parser;
use flipscore::config;
use flipscore::error::{FlipscoreError, Result};
use flipscore::input;
use flipscore::report::{self, OutputFormat, ReportKind};
use flipscore::score::{self, ranking};
use flipscore::types::config::{BaseWeights, PermitWeights, ScoringConfig};
use flipscore::types::contractor::ContractorRecord;
use flipscore::types::report::{Grade, Leaderboard, LeaderboardEntry, RankingReport};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// A scored contractor graded D or F.
    pub const FLAGGED: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_clock(as_of: Option<&str>) -> Result<DateTime<Utc>> {
    match as_of {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|_| FlipscoreError::InvalidTimestamp(raw.to_string())),
        None => Ok(Utc::now()),
    }
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn load_weights(root: &Path) -> Result<(BaseWeights, PermitWeights)> {
    let cfg = config::load_config(root)?.unwrap_or_else(ScoringConfig::default);
    Ok((cfg.base_weights(), cfg.permit_weights()))
}

/// The score surfaced to users: permit-enhanced when the record carries any
/// permit signal, otherwise the review-only base score.
fn authoritative_score(
    record: &ContractorRecord,
    base_weights: &BaseWeights,
    permit_weights: &PermitWeights,
    now: DateTime<Utc>,
) -> (u32, Grade, bool) {
    if record.has_permit_signal() {
        let report = score::calculate_permit_based_score(record, base_weights, permit_weights, now);
        (report.enhanced_score, report.grade, true)
    } else {
        let report = score::calculate_overall_score(record, base_weights, now);
        (report.overall_score, report.grade, false)
    }
}

fn require_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(FlipscoreError::PathNotFound(path.display().to_string()));
    }
    Ok(())
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            require_path(&cmd.path)?;
            let now = resolve_clock(cmd.as_of.as_deref())?;
            let record = input::load_record(&cmd.path)?;
            let root = cmd.path.parent().unwrap_or_else(|| Path::new("."));
            let (base_weights, permit_weights) = load_weights(root)?;

            let (grade, report_kind) = if record.has_permit_signal() {
                let report = score::calculate_permit_based_score(
                    &record,
                    &base_weights,
                    &permit_weights,
                    now,
                );
                (report.grade, ReportKind::Enhanced(report))
            } else {
                let report = score::calculate_overall_score(&record, &base_weights, now);
                (report.grade, ReportKind::Base(report))
            };

            let rendered = report::render(&report_kind, output_format(&cmd.format))?;
            println!("{rendered}");

            if grade.needs_review() {
                Ok(exit_code::FLAGGED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Rank(cmd) => {
            require_path(&cmd.path)?;
            let now = resolve_clock(cmd.as_of.as_deref())?;
            let records = input::load_records(&cmd.path)?;
            let (base_weights, permit_weights) = load_weights(&cmd.path)?;

            let target_index = records
                .iter()
                .position(|record| record.id == cmd.contractor)
                .ok_or_else(|| FlipscoreError::ContractorNotFound(cmd.contractor.clone()))?;
            let target = &records[target_index];

            let scores: Vec<(u32, Grade)> = records
                .iter()
                .map(|record| {
                    let (score, grade, _) =
                        authoritative_score(record, &base_weights, &permit_weights, now);
                    (score, grade)
                })
                .collect();
            let scored: Vec<ranking::ScoredContractor<'_>> = records
                .iter()
                .zip(&scores)
                .map(|(record, (score, _))| ranking::ScoredContractor {
                    record,
                    score: f64::from(*score),
                })
                .collect();

            let bracket = match cmd.bracket.as_deref() {
                Some(label) => ranking::ExperienceBracket::by_label(label)
                    .ok_or_else(|| FlipscoreError::InvalidBracket(label.to_string()))?,
                None => ranking::bracket_for(target.years_in_business),
            };
            let (target_score, target_grade) = scores[target_index];
            let placement =
                ranking::peer_ranking_in_bracket(target, f64::from(target_score), &scored, bracket);

            let report_kind = ReportKind::Ranking(RankingReport {
                contractor_id: target.id.clone(),
                contractor_name: target.name.clone(),
                score: target_score,
                grade: target_grade,
                bracket: bracket.label.to_string(),
                rank: placement.rank,
                total: placement.total,
                percentile: placement.percentile,
            });
            let rendered = report::render(&report_kind, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Leaderboard(cmd) => {
            require_path(&cmd.path)?;
            let now = resolve_clock(cmd.as_of.as_deref())?;
            let records = input::load_records(&cmd.path)?;
            let (base_weights, permit_weights) = load_weights(&cmd.path)?;

            let mut entries: Vec<LeaderboardEntry> = records
                .iter()
                .map(|record| {
                    let (score, grade, permit_verified) =
                        authoritative_score(record, &base_weights, &permit_weights, now);
                    LeaderboardEntry {
                        contractor_id: record.id.clone(),
                        contractor_name: record.name.clone(),
                        score,
                        grade,
                        permit_verified,
                    }
                })
                .collect();
            entries.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| a.contractor_name.cmp(&b.contractor_name))
            });

            let report_kind = ReportKind::Leaderboard(Leaderboard { entries });
            let rendered = report::render(&report_kind, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
