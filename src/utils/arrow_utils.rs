//! Arrow utility functions for indicator extraction and column handling
//!
//! This module provides utility functions for reading individual indicator
//! values out of Arrow arrays, and for appending a computed score column to
//! an existing record batch.

use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Int8Array, Int16Array, Int32Array, Int64Array, UInt8Array,
    UInt16Array, UInt32Array, UInt64Array,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::{Result, ScoreError};

/// Check whether a column type is accepted for comorbidity indicators
///
/// Indicators may be stored in any integer width or as booleans; everything
/// else (strings, floats, dates) is rejected during validation.
#[must_use]
pub const fn is_indicator_type(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Boolean
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Extract an indicator value from an Arrow array at the specified index
///
/// # Arguments
/// * `array` - The Arrow array
/// * `index` - The index of the value to extract
///
/// # Returns
/// `Some(i64)` if the value exists and has an accepted indicator type,
/// otherwise `None`. Booleans map to 0/1.
pub fn indicator_at(array: &ArrayRef, index: usize) -> Option<i64> {
    if array.is_null(index) {
        return None;
    }

    match array.data_type() {
        DataType::Boolean => {
            let bool_array = array.as_any().downcast_ref::<BooleanArray>()?;
            Some(i64::from(bool_array.value(index)))
        }
        DataType::Int8 => {
            let int_array = array.as_any().downcast_ref::<Int8Array>()?;
            Some(i64::from(int_array.value(index)))
        }
        DataType::Int16 => {
            let int_array = array.as_any().downcast_ref::<Int16Array>()?;
            Some(i64::from(int_array.value(index)))
        }
        DataType::Int32 => {
            let int_array = array.as_any().downcast_ref::<Int32Array>()?;
            Some(i64::from(int_array.value(index)))
        }
        DataType::Int64 => {
            let int_array = array.as_any().downcast_ref::<Int64Array>()?;
            Some(int_array.value(index))
        }
        DataType::UInt8 => {
            let int_array = array.as_any().downcast_ref::<UInt8Array>()?;
            Some(i64::from(int_array.value(index)))
        }
        DataType::UInt16 => {
            let int_array = array.as_any().downcast_ref::<UInt16Array>()?;
            Some(i64::from(int_array.value(index)))
        }
        DataType::UInt32 => {
            let int_array = array.as_any().downcast_ref::<UInt32Array>()?;
            Some(i64::from(int_array.value(index)))
        }
        DataType::UInt64 => {
            let int_array = array.as_any().downcast_ref::<UInt64Array>()?;
            i64::try_from(int_array.value(index)).ok()
        }
        _ => None,
    }
}

/// Return a new record batch with `scores` appended as an Int32 column
///
/// The input batch is not modified. Fails if the score count does not match
/// the batch row count.
pub fn with_score_column(
    batch: &RecordBatch,
    scores: &[i32],
    column_name: &str,
) -> Result<RecordBatch> {
    if scores.len() != batch.num_rows() {
        return Err(ScoreError::InvalidArgument(format!(
            "score count {} does not match batch row count {}",
            scores.len(),
            batch.num_rows()
        )));
    }

    let mut fields: Vec<Field> = batch
        .schema()
        .fields()
        .iter()
        .map(|field| field.as_ref().clone())
        .collect();
    fields.push(Field::new(column_name, DataType::Int32, false));

    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();
    columns.push(Arc::new(Int32Array::from(scores.to_vec())));

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}
