//! Dataset validation for comorbidity scoring
//!
//! Validation runs over the entire dataset before any score is computed.
//! The checks have a fixed precedence; when a dataset would fail several of
//! them, only the first failing check is reported:
//!
//! 1. the dataset contains at least one record batch;
//! 2. every batch carries all 29 required comorbidity columns;
//! 3. every value in those columns, across all rows, is 0 or 1;
//! 4. when the cardiac arrhythmia term is requested, the column is present;
//! 5. when requested, every cardiac arrhythmia value is 0 or 1.

use arrow::array::{Array, ArrayRef};
use arrow::record_batch::RecordBatch;
use itertools::Itertools;

use crate::error::{Result, ScoreError};
use crate::models::{CARDIAC_ARRHYTHMIA_COLUMN, Comorbidity};
use crate::schema::{expected_columns_summary, missing_comorbidity_columns};
use crate::utils::{indicator_at, is_indicator_type};

/// Validate a dataset for scoring
///
/// Runs the full validation pass described at module level. A single invalid
/// cell anywhere aborts the whole computation; no scores are produced for a
/// dataset that fails any check.
pub fn validate_dataset(batches: &[RecordBatch], include_cardiac_arrhythmia: bool) -> Result<()> {
    if batches.is_empty() {
        return Err(ScoreError::SchemaError(
            "dataset contains no record batches".to_string(),
        ));
    }

    check_required_columns(batches)?;

    let required: Vec<&str> = Comorbidity::all()
        .into_iter()
        .map(Comorbidity::column_name)
        .collect();
    check_binary_columns(batches, &required)?;

    if include_cardiac_arrhythmia {
        check_cardiac_arrhythmia_present(batches)?;
        check_binary_columns(batches, &[CARDIAC_ARRHYTHMIA_COLUMN])?;
    }

    Ok(())
}

fn check_required_columns(batches: &[RecordBatch]) -> Result<()> {
    for batch in batches {
        let missing = missing_comorbidity_columns(&batch.schema());
        if !missing.is_empty() {
            let missing_names = missing.iter().map(|c| c.column_name()).join(", ");
            return Err(ScoreError::SchemaError(format!(
                "missing or misnamed comorbidity columns: {missing_names}; expected the \
                 HCUP Elixhauser indicator columns: {}",
                expected_columns_summary()
            )));
        }
    }
    Ok(())
}

fn check_cardiac_arrhythmia_present(batches: &[RecordBatch]) -> Result<()> {
    for batch in batches {
        if batch.column_by_name(CARDIAC_ARRHYTHMIA_COLUMN).is_none() {
            return Err(ScoreError::SchemaError(format!(
                "cardiac arrhythmia column missing or misnamed: expected {CARDIAC_ARRHYTHMIA_COLUMN}"
            )));
        }
    }
    Ok(())
}

/// Check that every value of the named columns, in every batch, is 0 or 1
///
/// Column presence has already been verified by the time this runs, so a
/// lookup miss cannot skip a required column.
fn check_binary_columns(batches: &[RecordBatch], names: &[&str]) -> Result<()> {
    for (batch_index, batch) in batches.iter().enumerate() {
        for name in names {
            if let Some(column) = batch.column_by_name(name) {
                check_binary_column(column, name, batch_index)?;
            }
        }
    }
    Ok(())
}

fn check_binary_column(column: &ArrayRef, name: &str, batch_index: usize) -> Result<()> {
    if !is_indicator_type(column.data_type()) {
        return Err(ScoreError::DomainError(format!(
            "comorbidity indicators must be 0 or 1: column {name} has unsupported type {} \
             (batch {batch_index})",
            column.data_type()
        )));
    }

    for row in 0..column.len() {
        if column.is_null(row) {
            return Err(ScoreError::DomainError(format!(
                "comorbidity indicators must be 0 or 1: column {name} is null at row {row} \
                 (batch {batch_index})"
            )));
        }
        match indicator_at(column, row) {
            Some(0 | 1) => {}
            Some(value) => {
                return Err(ScoreError::DomainError(format!(
                    "comorbidity indicators must be 0 or 1: column {name} contains {value} \
                     at row {row} (batch {batch_index})"
                )));
            }
            None => {
                return Err(ScoreError::DomainError(format!(
                    "comorbidity indicators must be 0 or 1: column {name} contains an \
                     out-of-range value at row {row} (batch {batch_index})"
                )));
            }
        }
    }

    Ok(())
}
