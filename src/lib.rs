//! A Rust library for computing Elixhauser comorbidity index scores over
//! in-memory Arrow record batches, with schema and domain validation.
//!
//! Given a table whose columns are the 29 HCUP Elixhauser 0/1 comorbidity
//! flags, the crate returns one weighted-sum score per row under one of
//! three published weighting schemes (`van_walraven`, `sid_30`, `sid_29`),
//! optionally extended with a cardiac arrhythmia term.

pub mod algorithm;
pub mod error;
pub mod models;
pub mod schema;
pub mod utils;
pub mod weights;

// Re-export the most common types for easier use
// Core types
pub use algorithm::{ScoreCalculator, compute_scores, validate_dataset};
pub use error::{Result, ScoreError};
pub use models::{CARDIAC_ARRHYTHMIA_COLUMN, Comorbidity, ScoreMethod};

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;

// Schema helpers
pub use schema::{
    elixhauser_schema, elixhauser_schema_with_cardiac_arrhythmia, missing_comorbidity_columns,
};

// Weight tables
pub use weights::{cardiac_arrhythmia_weight, weight};

// Utility functions
pub use utils::with_score_column;
