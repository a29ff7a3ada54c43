//! Inspection-violation sub-score.

use crate::score::clamp_score;
use crate::types::contractor::Project;

/// 100 minus the violation rate across every project inspection on record.
/// Projects without inspections contribute nothing. No inspections -> 50.
pub fn safety_score(projects: &[Project]) -> f64 {
    let mut total_inspections = 0u64;
    let mut total_violations = 0u64;
    for project in projects {
        total_inspections += project.inspections.len() as u64;
        total_violations += project
            .inspections
            .iter()
            .map(|inspection| u64::from(inspection.violations))
            .sum::<u64>();
    }
    if total_inspections == 0 {
        return 50.0;
    }
    let violation_rate = total_violations as f64 / total_inspections as f64;
    clamp_score(100.0 * (1.0 - violation_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::contractor::{ProjectInspection, ProjectStatus};

    fn project_with_inspections(violations: &[u32]) -> Project {
        Project {
            id: "p".into(),
            status: ProjectStatus::Completed,
            planned_end: None,
            actual_end: None,
            budget_planned: None,
            budget_actual: None,
            inspections: violations
                .iter()
                .map(|&violations| ProjectInspection { violations })
                .collect(),
        }
    }

    #[test]
    fn no_inspections_scores_neutral() {
        assert_eq!(safety_score(&[]), 50.0);
        assert_eq!(safety_score(&[project_with_inspections(&[])]), 50.0);
    }

    #[test]
    fn clean_record_scores_perfect() {
        let projects = vec![project_with_inspections(&[0, 0, 0])];
        assert_eq!(safety_score(&projects), 100.0);
    }

    #[test]
    fn violation_rate_spans_projects() {
        let projects = vec![
            project_with_inspections(&[1, 0]),
            project_with_inspections(&[0, 1]),
        ];
        // 2 violations over 4 inspections -> 50
        assert!((safety_score(&projects) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn rate_above_one_clamps_to_zero() {
        let projects = vec![project_with_inspections(&[5])];
        assert_eq!(safety_score(&projects), 0.0);
    }
}
