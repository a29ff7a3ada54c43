use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flipscore",
    version,
    about = "Contractor scoring and peer ranking CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single contractor record
    Score(ScoreCommand),
    /// Rank a contractor against its trade/experience cohort
    Rank(RankCommand),
    /// Score every record in a data directory and print a leaderboard
    Leaderboard(LeaderboardCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Contractor record (JSON file)
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Freeze the scoring clock at an RFC 3339 timestamp
    #[arg(long)]
    pub as_of: Option<String>,
}

#[derive(Args)]
pub struct RankCommand {
    /// Directory of contractor records (*.json)
    pub path: PathBuf,
    /// Id of the contractor to rank
    #[arg(long)]
    pub contractor: String,
    /// Rank against an explicit experience bracket (1-3, 3-6, 6-10, 10+)
    /// instead of the one derived from years in business
    #[arg(long)]
    pub bracket: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Freeze the scoring clock at an RFC 3339 timestamp
    #[arg(long)]
    pub as_of: Option<String>,
}

#[derive(Args)]
pub struct LeaderboardCommand {
    /// Directory of contractor records (*.json)
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Freeze the scoring clock at an RFC 3339 timestamp
    #[arg(long)]
    pub as_of: Option<String>,
}
