//! The contractor scoring engine.
//!
//! Pure and synchronous: every function reads its arguments and an explicit
//! `now`, holds no state, and is total over its input domain. Missing or
//! empty data never fails a computation; each sub-score defines a neutral
//! fallback instead. Callers own fetching and concurrency.

pub mod delivery;
pub mod experience;
pub mod insurance;
pub mod permits;
pub mod ranking;
pub mod reviews;
pub mod risk;
pub mod safety;

use crate::types::config::{BaseWeights, PermitWeights};
use crate::types::contractor::ContractorRecord;
use crate::types::report::{EnhancedReport, Grade, ScoreBreakdown, ScoreReport};
use chrono::{DateTime, Utc};
use tracing::debug;

pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Fixed grade thresholds, shared by every surface that turns a score into
/// a letter.
pub fn calculate_grade(score: f64) -> Grade {
    if score >= 90.0 {
        Grade::A
    } else if score >= 80.0 {
        Grade::B
    } else if score >= 70.0 {
        Grade::C
    } else if score >= 60.0 {
        Grade::D
    } else {
        Grade::F
    }
}

/// The base score: eight weighted sub-scores folded into one 0-100 value.
pub fn calculate_overall_score(
    record: &ContractorRecord,
    weights: &BaseWeights,
    now: DateTime<Utc>,
) -> ScoreReport {
    let factor = experience::experience_factor(record.years_in_business, record.total_projects);
    let subscores = ScoreBreakdown {
        reviews: reviews::review_score(&record.reviews),
        on_time: delivery::on_time_score(&record.projects),
        budget: delivery::budget_score(&record.projects),
        safety: safety::safety_score(&record.projects),
        communication: reviews::communication_score(&record.reviews),
        risk: risk::risk_score(&record.legal_events, factor, now),
        insurance: insurance::insurance_score(&record.insurance_policies, now),
        experience: experience::experience_score(
            record.years_in_business,
            record.total_projects,
            record.total_value,
        ),
    };

    let weighted = subscores.reviews * weights.reviews
        + subscores.on_time * weights.on_time
        + subscores.budget * weights.budget
        + subscores.safety * weights.safety
        + subscores.communication * weights.communication
        + subscores.risk * weights.risk
        + subscores.insurance * weights.insurance
        + subscores.experience * weights.experience;
    let overall_score = clamp_score(weighted.round()) as u32;

    debug!(
        contractor = %record.id,
        overall_score,
        reviews = subscores.reviews,
        risk = subscores.risk,
        "computed base score"
    );

    ScoreReport {
        contractor_id: record.id.clone(),
        contractor_name: record.name.clone(),
        overall_score,
        grade: calculate_grade(overall_score as f64),
        subscores,
        experience_factor: factor,
        sample_size: record.reviews.len(),
    }
}

/// The permit-enhanced score: blends the base score with permit completion,
/// specialization, insurance-correlation and project-verification signals.
/// This is the authoritative ranking value wherever permit data exists; the
/// base score inside `base` is the legacy value.
pub fn calculate_permit_based_score(
    record: &ContractorRecord,
    base_weights: &BaseWeights,
    permit_weights: &PermitWeights,
    now: DateTime<Utc>,
) -> EnhancedReport {
    let base = calculate_overall_score(record, base_weights, now);
    let permit_metrics = permits::permit_metrics(&record.permits);
    let specialization_score = permits::specialization_score(&record.specializations);
    let insurance_correlation_score =
        permits::correlation_score(&record.insurance_correlations);
    let project_verification_score =
        permits::project_verification_score(&record.projects, &record.permits);

    let blended = base.overall_score as f64 * permit_weights.base
        + base.subscores.experience * permit_weights.experience
        + base.subscores.risk * permit_weights.risk
        + base.subscores.insurance * permit_weights.insurance
        + permit_metrics.overall * permit_weights.permits
        + specialization_score * permit_weights.specialization
        + insurance_correlation_score * permit_weights.correlation
        + project_verification_score * permit_weights.verification;
    let enhanced_score = clamp_score(blended.round()) as u32;

    debug!(
        contractor = %record.id,
        enhanced_score,
        legacy_score = base.overall_score,
        permits = permit_metrics.total_permits,
        "computed permit-enhanced score"
    );

    EnhancedReport {
        contractor_id: record.id.clone(),
        contractor_name: record.name.clone(),
        enhanced_score,
        grade: calculate_grade(enhanced_score as f64),
        permit_metrics,
        specialization_score,
        insurance_correlation_score,
        project_verification_score,
        base,
    }
}
