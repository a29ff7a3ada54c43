//! Permit-derived sub-scores feeding the enhanced blend.
//!
//! Permits are the external verification signal: a contractor who pulls
//! permits, closes them quickly, and passes inspections earns scores that
//! reviews alone cannot buy.

use crate::score::clamp_score;
use crate::types::contractor::{
    CorrelationType, InsurancePermitCorrelation, InspectionStatus, Permit, PermitStatus, Project,
    RiskLevel, WorkSpecialization,
};
use crate::types::report::PermitMetrics;

/// Completion, timeline, efficiency and compliance rates over the permit
/// list, folded into one 0-100 metric. No permits -> zero rates, overall 50.
pub fn permit_metrics(permits: &[Permit]) -> PermitMetrics {
    let total = permits.len();
    if total == 0 {
        return PermitMetrics {
            total_permits: 0,
            completion_rate: 0.0,
            average_timeline_days: 0.0,
            efficiency: 0.0,
            compliance_rate: 0.0,
            overall: 50.0,
        };
    }

    let completed = permits
        .iter()
        .filter(|permit| permit.status == PermitStatus::Completed)
        .count();
    let completion_rate = clamp_score(completed as f64 / total as f64 * 100.0);

    let timelines: Vec<f64> = permits
        .iter()
        .filter_map(Permit::timeline_days)
        .collect();
    let average_timeline_days = if timelines.is_empty() {
        0.0
    } else {
        timelines.iter().sum::<f64>() / timelines.len() as f64
    };
    // Ten points off per month of permit turnaround.
    let efficiency = if timelines.is_empty() {
        0.0
    } else {
        timelines
            .iter()
            .map(|days| (100.0 - (days / 30.0) * 10.0).max(0.0))
            .sum::<f64>()
            / timelines.len() as f64
    };

    let failed_inspections = permits
        .iter()
        .flat_map(|permit| permit.inspections.iter())
        .filter(|inspection| inspection.status == InspectionStatus::Failed)
        .count();
    let compliance_rate = if failed_inspections == 0 {
        100.0
    } else {
        (100.0 - (failed_inspections as f64 / total as f64) * 20.0).max(0.0)
    };

    let overall = clamp_score(0.4 * completion_rate + 0.3 * efficiency + 0.3 * compliance_rate);

    PermitMetrics {
        total_permits: total,
        completion_rate,
        average_timeline_days,
        efficiency: clamp_score(efficiency),
        compliance_rate: clamp_score(compliance_rate),
        overall,
    }
}

/// Weighted average of per-specialization performance, weighted by
/// log10(permit_count + 1) so depth in one trade counts more than a single
/// permit in many. No records, or no records with permits -> 50.
pub fn specialization_score(specializations: &[WorkSpecialization]) -> f64 {
    if specializations.is_empty() {
        return 50.0;
    }
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for record in specializations {
        let weight = (record.permit_count as f64 + 1.0).log10();
        let volume = (record.permit_count as f64 * 5.0).min(100.0);
        let duration = (100.0 - record.average_duration * 0.5).min(100.0);
        let record_score = 0.4 * record.success_rate + 0.3 * volume + 0.3 * duration;
        weighted_sum += record_score * weight;
        weight_total += weight;
    }
    if weight_total <= 0.0 {
        return 50.0;
    }
    clamp_score(weighted_sum / weight_total)
}

/// Average of per-correlation scores: insurance bound before permit work is
/// the healthy pattern (90), during is tolerable (60), after the fact is a
/// red flag (30), nudged by the assessed risk level. No data -> 50.
pub fn correlation_score(correlations: &[InsurancePermitCorrelation]) -> f64 {
    if correlations.is_empty() {
        return 50.0;
    }
    let sum: f64 = correlations
        .iter()
        .map(|correlation| {
            let base = match correlation.correlation_type {
                CorrelationType::AddedBeforePermit => 90.0,
                CorrelationType::AddedDuringWork => 60.0,
                CorrelationType::AddedAfterPermit => 30.0,
            };
            let adjusted = match correlation.risk_level {
                RiskLevel::Low => base + 10.0,
                RiskLevel::Medium => base,
                RiskLevel::High => base - 20.0,
            };
            clamp_score(adjusted)
        })
        .sum();
    clamp_score(sum / correlations.len() as f64)
}

/// Share of projects backed by at least one permit, with a bonus for
/// projects spanning multiple permit types (more complex verified work).
/// No projects -> 50.
pub fn project_verification_score(projects: &[Project], permits: &[Permit]) -> f64 {
    if projects.is_empty() {
        return 50.0;
    }

    let mut verified = 0usize;
    let mut multi_type = 0usize;
    for project in projects {
        let mut types: Vec<&str> = permits
            .iter()
            .filter(|permit| permit.project_id.as_deref() == Some(project.id.as_str()))
            .map(|permit| permit.permit_type.as_str())
            .collect();
        types.sort_unstable();
        types.dedup();
        if types.is_empty() {
            continue;
        }
        verified += 1;
        if types.len() > 1 {
            multi_type += 1;
        }
    }

    let verification_rate = verified as f64 / projects.len() as f64 * 100.0;
    let complexity_bonus = if verified > 0 {
        multi_type as f64 / verified as f64 * 20.0
    } else {
        0.0
    };
    clamp_score(verification_rate + complexity_bonus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::contractor::{PermitInspection, ProjectStatus};
    use chrono::{Duration, Utc};

    fn permit(status: PermitStatus, days: i64, project_id: Option<&str>) -> Permit {
        let requested = Utc::now() - Duration::days(days + 10);
        Permit {
            status,
            requested_date: Some(requested),
            completed_date: Some(requested + Duration::days(days)),
            permit_type: "general".into(),
            project_id: project_id.map(str::to_string),
            inspections: vec![],
        }
    }

    fn project(id: &str) -> Project {
        Project {
            id: id.into(),
            status: ProjectStatus::Completed,
            planned_end: None,
            actual_end: None,
            budget_planned: None,
            budget_actual: None,
            inspections: vec![],
        }
    }

    #[test]
    fn no_permits_is_neutral_with_zero_rates() {
        let metrics = permit_metrics(&[]);
        assert_eq!(metrics.overall, 50.0);
        assert_eq!(metrics.completion_rate, 0.0);
        assert_eq!(metrics.efficiency, 0.0);
        assert_eq!(metrics.compliance_rate, 0.0);
    }

    #[test]
    fn fast_clean_permits_score_high() {
        let permits = vec![
            permit(PermitStatus::Completed, 15, None),
            permit(PermitStatus::Completed, 30, None),
        ];
        let metrics = permit_metrics(&permits);
        assert_eq!(metrics.completion_rate, 100.0);
        assert!((metrics.average_timeline_days - 22.5).abs() < 1e-9);
        // efficiencies: 95 and 90 -> 92.5
        assert!((metrics.efficiency - 92.5).abs() < 1e-9);
        assert_eq!(metrics.compliance_rate, 100.0);
        // 0.4*100 + 0.3*92.5 + 0.3*100
        assert!((metrics.overall - 97.75).abs() < 1e-9);
    }

    #[test]
    fn failed_inspections_cut_compliance() {
        let mut flagged = permit(PermitStatus::Completed, 20, None);
        flagged.inspections = vec![
            PermitInspection {
                status: InspectionStatus::Failed,
            },
            PermitInspection {
                status: InspectionStatus::Passed,
            },
        ];
        let permits = vec![flagged, permit(PermitStatus::Issued, 0, None)];
        let metrics = permit_metrics(&permits);
        // 1 failure over 2 permits -> 100 - 0.5*20 = 90
        assert!((metrics.compliance_rate - 90.0).abs() < 1e-9);
    }

    #[test]
    fn slow_permits_floor_efficiency_at_zero() {
        let permits = vec![permit(PermitStatus::Completed, 400, None)];
        let metrics = permit_metrics(&permits);
        assert_eq!(metrics.efficiency, 0.0);
    }

    #[test]
    fn specialization_neutral_on_empty_or_weightless() {
        assert_eq!(specialization_score(&[]), 50.0);
        let weightless = vec![WorkSpecialization {
            specialization: "tile".into(),
            permit_count: 0,
            success_rate: 100.0,
            average_duration: 10.0,
        }];
        assert_eq!(specialization_score(&weightless), 50.0);
    }

    #[test]
    fn specialization_weights_by_permit_volume() {
        let records = vec![
            WorkSpecialization {
                specialization: "electrical".into(),
                permit_count: 99,
                success_rate: 100.0,
                average_duration: 0.0,
            },
            WorkSpecialization {
                specialization: "fencing".into(),
                permit_count: 9,
                success_rate: 0.0,
                average_duration: 200.0,
            },
        ];
        // electrical: 0.4*100 + 0.3*100 + 0.3*100 = 100, weight log10(100)=2
        // fencing:    0.4*0 + 0.3*45 + 0.3*0 = 13.5, weight log10(10)=1
        let expected = (100.0 * 2.0 + 13.5) / 3.0;
        assert!((specialization_score(&records) - expected).abs() < 1e-9);
    }

    #[test]
    fn correlation_scores_by_type_and_risk() {
        let case = |correlation_type, risk_level| {
            correlation_score(&[InsurancePermitCorrelation {
                correlation_type,
                risk_level,
            }])
        };
        assert_eq!(case(CorrelationType::AddedBeforePermit, RiskLevel::Low), 100.0);
        assert_eq!(case(CorrelationType::AddedBeforePermit, RiskLevel::High), 70.0);
        assert_eq!(case(CorrelationType::AddedDuringWork, RiskLevel::Medium), 60.0);
        assert_eq!(case(CorrelationType::AddedAfterPermit, RiskLevel::High), 10.0);
        assert_eq!(correlation_score(&[]), 50.0);
    }

    #[test]
    fn verification_rewards_linked_and_complex_projects() {
        let projects = vec![project("p1"), project("p2")];
        let mut electrical = permit(PermitStatus::Completed, 10, Some("p1"));
        electrical.permit_type = "electrical".into();
        let mut plumbing = permit(PermitStatus::Completed, 10, Some("p1"));
        plumbing.permit_type = "plumbing".into();
        let permits = vec![electrical, plumbing];

        // p1 verified with two permit types, p2 unverified:
        // rate 50, bonus (1/1)*20 -> 70
        let score = project_verification_score(&projects, &permits);
        assert!((score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn verification_neutral_without_projects() {
        assert_eq!(project_verification_score(&[], &[]), 50.0);
    }

    #[test]
    fn fully_verified_caps_at_one_hundred() {
        let projects = vec![project("p1")];
        let mut a = permit(PermitStatus::Completed, 10, Some("p1"));
        a.permit_type = "electrical".into();
        let mut b = permit(PermitStatus::Completed, 10, Some("p1"));
        b.permit_type = "plumbing".into();
        // rate 100 + bonus 20, capped
        assert_eq!(project_verification_score(&projects, &[a, b]), 100.0);
    }
}
