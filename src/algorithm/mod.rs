//! Scoring algorithm for comorbidity indicator tables
//!
//! This module contains the validation passes and the weighted-sum scoring
//! implementation behind the public `ScoreCalculator` contract.

pub mod score;
pub mod validation;

pub use score::{ScoreCalculator, compute_scores};
pub use validation::validate_dataset;
