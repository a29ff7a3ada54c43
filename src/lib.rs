//! flipscore: contractor scoring and peer-ranking engine.
//!
//! The engine (`score`) is pure: it consumes already-assembled contractor
//! aggregates and an explicit clock, and produces 0-100 scores, letter
//! grades and cohort rankings. `input`, `config` and `report` are the
//! CLI-side collaborators that feed it from JSON exports and render the
//! results.

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod score;
pub mod types;
