//! Experience sub-score and the penalty-dampening experience factor.

use crate::score::clamp_score;

/// Up to 40 points for years in business, up to 30 for project count and up
/// to 30 for lifetime contract value, the latter two on a log scale so the
/// curve saturates instead of rewarding raw volume linearly.
pub fn experience_score(years_in_business: f64, total_projects: u32, total_value: f64) -> f64 {
    let year_points = (years_in_business * 2.0).min(40.0);
    let project_points = if total_projects > 0 {
        ((total_projects as f64).log10() * 15.0).min(30.0)
    } else {
        0.0
    };
    let value_millions = total_value / 1_000_000.0;
    let value_points = ((value_millions + 1.0).log10() * 15.0).min(30.0);
    clamp_score(year_points + project_points + value_points)
}

/// Dampening multiplier applied to legal-event penalties: seasoned
/// contractors absorb proportionally smaller hits. Capped at 0.5 so no
/// amount of history erases more than half a penalty.
pub fn experience_factor(years_in_business: f64, total_projects: u32) -> f64 {
    let project_term = if total_projects > 0 {
        ((total_projects as f64).log10() * 0.1).min(0.3)
    } else {
        0.0
    };
    let year_term = (years_in_business * 0.01).min(0.2);
    (project_term + year_term).min(0.5)
}
