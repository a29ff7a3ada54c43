//! Schedule and budget sub-scores over the contractor's project history.

use crate::score::clamp_score;
use crate::types::contractor::{Project, ProjectStatus};

/// Fraction of completed projects delivered on or before the planned end
/// date, as a percentage. Projects missing either date are ignored.
/// No qualifying projects -> 50.
pub fn on_time_score(projects: &[Project]) -> f64 {
    let mut qualifying = 0usize;
    let mut on_time = 0usize;
    for project in projects {
        if project.status != ProjectStatus::Completed {
            continue;
        }
        let (Some(planned), Some(actual)) = (project.planned_end, project.actual_end) else {
            continue;
        };
        qualifying += 1;
        if actual <= planned {
            on_time += 1;
        }
    }
    if qualifying == 0 {
        return 50.0;
    }
    clamp_score(on_time as f64 / qualifying as f64 * 100.0)
}

/// 100 minus the mean relative budget deviation (each deviation capped at
/// 100%), over projects with a positive planned budget and a recorded
/// actual. No qualifying projects -> 50.
pub fn budget_score(projects: &[Project]) -> f64 {
    let deviations: Vec<f64> = projects
        .iter()
        .filter_map(|project| {
            let planned = project.budget_planned?;
            let actual = project.budget_actual?;
            if planned <= 0.0 {
                return None;
            }
            Some(((actual - planned).abs() / planned).min(1.0))
        })
        .collect();
    if deviations.is_empty() {
        return 50.0;
    }
    let mean = deviations.iter().sum::<f64>() / deviations.len() as f64;
    clamp_score(100.0 * (1.0 - mean))
}
