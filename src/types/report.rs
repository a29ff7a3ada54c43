//! Engine output shapes, serialized as-is into JSON reports.

use serde::Serialize;
use std::fmt;

/// Letter grade derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// D and F grades are flagged for manual review by the CLI exit code.
    pub fn needs_review(&self) -> bool {
        matches!(self, Grade::D | Grade::F)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// The eight weighted sub-scores behind a base score, each in [0, 100].
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub reviews: f64,
    pub on_time: f64,
    pub budget: f64,
    pub safety: f64,
    pub communication: f64,
    pub risk: f64,
    pub insurance: f64,
    pub experience: f64,
}

/// Output of the base score engine.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub contractor_id: String,
    pub contractor_name: String,
    pub overall_score: u32,
    pub grade: Grade,
    pub subscores: ScoreBreakdown,
    /// Dampening factor applied to legal penalties, 0.0-0.5.
    pub experience_factor: f64,
    /// Number of reviews behind the review sub-score.
    pub sample_size: usize,
}

/// Aggregate permit statistics feeding the enhanced blend.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitMetrics {
    pub total_permits: usize,
    /// Percent of permits in COMPLETED status.
    pub completion_rate: f64,
    /// Mean days from request to completion over completed permits.
    pub average_timeline_days: f64,
    pub efficiency: f64,
    pub compliance_rate: f64,
    /// 0.4*completion + 0.3*efficiency + 0.3*compliance, or 50 with no permits.
    pub overall: f64,
}

/// Output of the permit-enhanced scoring pass. `base` carries the legacy
/// score kept for backward compatibility.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedReport {
    pub contractor_id: String,
    pub contractor_name: String,
    pub enhanced_score: u32,
    pub grade: Grade,
    pub permit_metrics: PermitMetrics,
    pub specialization_score: f64,
    pub insurance_correlation_score: f64,
    pub project_verification_score: f64,
    pub base: ScoreReport,
}

/// A contractor's standing within its trade/experience cohort.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    pub contractor_id: String,
    pub contractor_name: String,
    pub score: u32,
    pub grade: Grade,
    /// Experience bracket label, e.g. "3-6".
    pub bracket: String,
    /// Competition rank: 1 + number of strictly higher scorers. Ties share
    /// a rank. 0 on an empty cohort.
    pub rank: usize,
    /// Cohort size including the contractor itself.
    pub total: usize,
    pub percentile: u32,
}

/// One leaderboard row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub contractor_id: String,
    pub contractor_name: String,
    pub score: u32,
    pub grade: Grade,
    /// True when the score is the permit-enhanced value rather than the
    /// review-only base score.
    pub permit_verified: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}
