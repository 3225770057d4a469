//! Utility functions for working with indicator record batches

pub mod arrow_utils;

pub use arrow_utils::{indicator_at, is_indicator_type, with_score_column};
