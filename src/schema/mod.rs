//! Expected Arrow schema for comorbidity indicator tables

use std::sync::Arc;

use arrow_schema::{DataType, Field, Schema};
use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::models::{CARDIAC_ARRHYTHMIA_COLUMN, Comorbidity};

/// Get the Arrow schema for a comorbidity indicator table
///
/// One non-nullable Int8 flag column per required Elixhauser comorbidity.
/// Datasets built against this schema always pass column validation; the
/// validator itself also accepts wider integer and boolean columns.
#[must_use]
pub fn elixhauser_schema() -> Arc<Schema> {
    Arc::new(Schema::new(indicator_fields()))
}

/// Get the indicator schema with the optional cardiac arrhythmia column
/// appended
#[must_use]
pub fn elixhauser_schema_with_cardiac_arrhythmia() -> Arc<Schema> {
    let mut fields = indicator_fields();
    fields.push(Field::new(CARDIAC_ARRHYTHMIA_COLUMN, DataType::Int8, false));
    Arc::new(Schema::new(fields))
}

fn indicator_fields() -> Vec<Field> {
    Comorbidity::all()
        .into_iter()
        .map(|c| Field::new(c.column_name(), DataType::Int8, false))
        .collect()
}

/// Find the required comorbidity columns absent from a schema
#[must_use]
pub fn missing_comorbidity_columns(schema: &Schema) -> Vec<Comorbidity> {
    let present: FxHashSet<&str> = schema
        .fields()
        .iter()
        .map(|field| field.name().as_str())
        .collect();

    Comorbidity::all()
        .into_iter()
        .filter(|c| !present.contains(c.column_name()))
        .collect()
}

/// Enumerate every expected column with its description, for schema errors
///
/// The full 29-name list is spelled out so callers can correct their column
/// naming against the HCUP standard without consulting external tables.
#[must_use]
pub fn expected_columns_summary() -> String {
    Comorbidity::all()
        .into_iter()
        .map(|c| format!("{} ({})", c.column_name(), c.description()))
        .join(", ")
}
