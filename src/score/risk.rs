//! Legal-event risk sub-score.
//!
//! Each event deducts a severity-based penalty, dampened by the contractor's
//! experience factor and decayed exponentially with age (half-life on the
//! order of 16 months, `exp(-months/24)`), so an old minor dispute fades
//! while a fresh critical judgment dominates.

use crate::score::clamp_score;
use crate::types::contractor::{LegalEvent, LegalSeverity};
use chrono::{DateTime, Utc};

const DECAY_MONTHS: f64 = 24.0;

fn severity_penalty(severity: LegalSeverity) -> f64 {
    match severity {
        LegalSeverity::Low => 5.0,
        LegalSeverity::Medium => 10.0,
        LegalSeverity::High => 20.0,
        LegalSeverity::Critical => 35.0,
    }
}

/// Start from 100 and subtract the dampened, decayed penalty of every
/// legal event. No events -> 100.
pub fn risk_score(events: &[LegalEvent], experience_factor: f64, now: DateTime<Utc>) -> f64 {
    if events.is_empty() {
        return 100.0;
    }
    let mut score = 100.0;
    for event in events {
        let age_days = (now - event.effective_date()).num_seconds() as f64 / 86_400.0;
        let age_months = age_days / 30.0;
        let decay = (-age_months / DECAY_MONTHS).exp();
        let penalty = severity_penalty(event.severity) * (1.0 - experience_factor);
        score -= penalty * decay;
    }
    clamp_score(score)
}
