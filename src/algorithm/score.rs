//! Weighted-sum computation for the Elixhauser comorbidity index
//!
//! Each row's score is the dot product of its 0/1 indicator vector with the
//! selected method's weight vector, optionally extended with the cardiac
//! arrhythmia term. Rows are independent; large batches are scored in
//! parallel without affecting output order.

use arrow::array::ArrayRef;
use arrow::record_batch::RecordBatch;
use rayon::prelude::*;

use super::validation::validate_dataset;
use crate::error::{Result, ScoreError};
use crate::models::{CARDIAC_ARRHYTHMIA_COLUMN, Comorbidity, ScoreMethod};
use crate::utils::indicator_at;
use crate::weights::{cardiac_arrhythmia_weight, weight};

/// Row count above which a batch is scored with rayon
const PARALLEL_ROW_THRESHOLD: usize = 4096;

/// Calculator for Elixhauser comorbidity index scores
///
/// Holds the weighting method and the cardiac arrhythmia flag; `compute`
/// validates the dataset and returns one score per row, in input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCalculator {
    method: ScoreMethod,
    include_cardiac_arrhythmia: bool,
}

impl ScoreCalculator {
    /// Create a calculator for the given weighting method
    #[must_use]
    pub const fn new(method: ScoreMethod) -> Self {
        Self {
            method,
            include_cardiac_arrhythmia: false,
        }
    }

    /// Request the optional cardiac arrhythmia term
    #[must_use]
    pub const fn with_cardiac_arrhythmia(mut self, include: bool) -> Self {
        self.include_cardiac_arrhythmia = include;
        self
    }

    /// Get the configured weighting method
    #[must_use]
    pub const fn method(&self) -> ScoreMethod {
        self.method
    }

    /// Compute one score per row across all batches, in input row order
    ///
    /// The dataset is validated in full before any score is produced; any
    /// failing check aborts the call with no partial result. The input
    /// batches are never modified.
    pub fn compute(&self, batches: &[RecordBatch]) -> Result<Vec<i32>> {
        if self.include_cardiac_arrhythmia && cardiac_arrhythmia_weight(self.method).is_none() {
            return Err(ScoreError::InvalidArgument(format!(
                "method {} defines no cardiac arrhythmia term; \
                 disable the cardiac arrhythmia option or select van_walraven or sid_30",
                self.method
            )));
        }

        validate_dataset(batches, self.include_cardiac_arrhythmia)?;

        let total_rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
        log::debug!(
            "computing {} scores for {} rows across {} batches",
            self.method,
            total_rows,
            batches.len()
        );

        let mut scores = Vec::with_capacity(total_rows);
        for batch in batches {
            self.score_batch(batch, &mut scores)?;
        }
        Ok(scores)
    }

    fn score_batch(&self, batch: &RecordBatch, scores: &mut Vec<i32>) -> Result<()> {
        let columns = self.weighted_columns(batch)?;
        let rows = batch.num_rows();

        if rows >= PARALLEL_ROW_THRESHOLD {
            scores.par_extend((0..rows).into_par_iter().map(|row| score_row(&columns, row)));
        } else {
            scores.extend((0..rows).map(|row| score_row(&columns, row)));
        }
        Ok(())
    }

    /// Pair every indicator column with its weight for the configured method
    ///
    /// Zero-weight comorbidities stay in the list; the full enumerated set
    /// participates in every sum.
    fn weighted_columns(&self, batch: &RecordBatch) -> Result<Vec<(i32, ArrayRef)>> {
        let mut columns = Vec::with_capacity(30);

        for comorbidity in Comorbidity::all() {
            let column = score_column(batch, comorbidity.column_name())?;
            columns.push((weight(self.method, comorbidity), column));
        }

        if self.include_cardiac_arrhythmia {
            if let Some(extra) = cardiac_arrhythmia_weight(self.method) {
                let column = score_column(batch, CARDIAC_ARRHYTHMIA_COLUMN)?;
                columns.push((extra, column));
            }
        }

        Ok(columns)
    }
}

/// Compute Elixhauser scores with the given method, one per input row
///
/// Convenience wrapper over [`ScoreCalculator`].
pub fn compute_scores(
    batches: &[RecordBatch],
    method: ScoreMethod,
    include_cardiac_arrhythmia: bool,
) -> Result<Vec<i32>> {
    ScoreCalculator::new(method)
        .with_cardiac_arrhythmia(include_cardiac_arrhythmia)
        .compute(batches)
}

fn score_column(batch: &RecordBatch, name: &str) -> Result<ArrayRef> {
    batch.column_by_name(name).cloned().ok_or_else(|| {
        ScoreError::SchemaError(format!("column {name} missing from record batch"))
    })
}

fn score_row(columns: &[(i32, ArrayRef)], row: usize) -> i32 {
    columns
        .iter()
        .map(|(w, column)| w * indicator_at(column, row).unwrap_or(0) as i32)
        .sum()
}
