//! Insurance coverage sub-score.

use crate::score::clamp_score;
use crate::types::contractor::{InsurancePolicy, InsuranceType};
use chrono::{DateTime, Utc};

/// Tiered on the largest active general-liability per-occurrence limit,
/// with a small bonus for carrying workers' comp. No policies at all -> 0;
/// policies on file but all expired -> 30.
pub fn insurance_score(policies: &[InsurancePolicy], now: DateTime<Utc>) -> f64 {
    if policies.is_empty() {
        return 0.0;
    }
    let active: Vec<&InsurancePolicy> = policies
        .iter()
        .filter(|policy| policy.is_active(now))
        .collect();
    if active.is_empty() {
        return 30.0;
    }

    let gl_coverage = active
        .iter()
        .filter(|policy| policy.policy_type == InsuranceType::GeneralLiability)
        .map(|policy| policy.coverage_each_occurrence)
        .fold(0.0_f64, f64::max);

    let mut score = if gl_coverage >= 2_000_000.0 {
        100.0
    } else if gl_coverage >= 1_000_000.0 {
        80.0
    } else if gl_coverage >= 500_000.0 {
        60.0
    } else {
        40.0
    };

    if active
        .iter()
        .any(|policy| policy.policy_type == InsuranceType::WorkersComp)
    {
        score += 5.0;
    }
    clamp_score(score)
}
