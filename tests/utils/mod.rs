//! Shared helpers for building in-memory comorbidity indicator tables

#![allow(dead_code)]

use std::sync::Arc;

use arrow::array::{ArrayRef, Int32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use elix_score::Comorbidity;

/// Build an indicator batch with all 29 required columns as Int32, zero
/// everywhere except the named overrides
pub fn indicator_batch(rows: usize, overrides: &[(&str, &[i32])]) -> RecordBatch {
    indicator_batch_with_extra(rows, overrides, &[])
}

/// Same as `indicator_batch`, with extra non-required columns appended
pub fn indicator_batch_with_extra(
    rows: usize,
    overrides: &[(&str, &[i32])],
    extra: &[(&str, &[i32])],
) -> RecordBatch {
    let mut fields = Vec::new();
    let mut columns: Vec<ArrayRef> = Vec::new();

    for comorbidity in Comorbidity::all() {
        let name = comorbidity.column_name();
        fields.push(Field::new(name, DataType::Int32, false));
        columns.push(Arc::new(Int32Array::from(column_values(
            name, rows, overrides,
        ))));
    }
    for (name, values) in extra {
        fields.push(Field::new(*name, DataType::Int32, false));
        columns.push(Arc::new(Int32Array::from(values.to_vec())));
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).expect("valid indicator batch")
}

/// Build an indicator batch with one required column left out
pub fn indicator_batch_missing(
    rows: usize,
    skip: &str,
    overrides: &[(&str, &[i32])],
) -> RecordBatch {
    let mut fields = Vec::new();
    let mut columns: Vec<ArrayRef> = Vec::new();

    for comorbidity in Comorbidity::all() {
        let name = comorbidity.column_name();
        if name == skip {
            continue;
        }
        fields.push(Field::new(name, DataType::Int32, false));
        columns.push(Arc::new(Int32Array::from(column_values(
            name, rows, overrides,
        ))));
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).expect("valid indicator batch")
}

/// Build an indicator batch where one required column is nullable and holds
/// the given values
pub fn indicator_batch_with_nulls(column: &str, values: &[Option<i32>]) -> RecordBatch {
    let rows = values.len();
    let mut fields = Vec::new();
    let mut columns: Vec<ArrayRef> = Vec::new();

    for comorbidity in Comorbidity::all() {
        let name = comorbidity.column_name();
        if name == column {
            fields.push(Field::new(name, DataType::Int32, true));
            columns.push(Arc::new(Int32Array::from(values.to_vec())));
        } else {
            fields.push(Field::new(name, DataType::Int32, false));
            columns.push(Arc::new(Int32Array::from(vec![0; rows])));
        }
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).expect("valid indicator batch")
}

fn column_values(name: &str, rows: usize, overrides: &[(&str, &[i32])]) -> Vec<i32> {
    overrides
        .iter()
        .find(|(n, _)| *n == name)
        .map_or_else(|| vec![0; rows], |(_, values)| values.to_vec())
}
