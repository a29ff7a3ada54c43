pub mod json;
pub mod md;

use crate::error::FlipscoreError;
use crate::types::report::{EnhancedReport, Leaderboard, RankingReport, ScoreReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Everything the CLI can print. `Base` is the review-only legacy score for
/// contractors with no permit signal; `Enhanced` carries both.
#[derive(Debug, Clone)]
pub enum ReportKind {
    Base(ScoreReport),
    Enhanced(EnhancedReport),
    Ranking(RankingReport),
    Leaderboard(Leaderboard),
}

pub fn render(report: &ReportKind, format: OutputFormat) -> Result<String, FlipscoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(FlipscoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
