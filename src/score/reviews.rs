//! Review-derived sub-scores.
//!
//! The star score is a Bayesian average pulled toward a prior of 4.2 stars
//! with a prior weight of 8 ratings, so a contractor with two perfect reviews
//! cannot outrank one with two hundred near-perfect reviews.

use crate::score::clamp_score;
use crate::types::contractor::Review;

const PRIOR_MEAN: f64 = 4.2;
const PRIOR_WEIGHT: f64 = 8.0;

/// Bayesian-averaged star rating, scaled from 1-5 to 0-100. Empty -> 50.
pub fn review_score(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 50.0;
    }
    let sum: f64 = reviews.iter().map(|review| review.stars).sum();
    let count = reviews.len() as f64;
    let bayesian = (sum + PRIOR_MEAN * PRIOR_WEIGHT) / (count + PRIOR_WEIGHT);
    clamp_score(bayesian / 5.0 * 100.0)
}

/// Mean of the optional 1-5 communication ratings, scaled to 0-100.
/// No rated reviews -> 50.
pub fn communication_score(reviews: &[Review]) -> f64 {
    let rated: Vec<f64> = reviews
        .iter()
        .filter_map(|review| review.communication)
        .collect();
    if rated.is_empty() {
        return 50.0;
    }
    let mean = rated.iter().sum::<f64>() / rated.len() as f64;
    clamp_score(mean / 5.0 * 100.0)
}
