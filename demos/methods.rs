//! Parse method identifiers from strings and exercise the cardiac
//! arrhythmia extension, including the rejected combinations.

use std::sync::Arc;

use arrow::array::{ArrayRef, Int8Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use elix_score::{CARDIAC_ARRHYTHMIA_COLUMN, Comorbidity, ScoreCalculator, ScoreMethod};
use log::{info, warn};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // One patient with cardiac arrhythmia and nothing else
    let mut fields: Vec<Field> = Comorbidity::all()
        .into_iter()
        .map(|c| Field::new(c.column_name(), DataType::Int8, false))
        .collect();
    fields.push(Field::new(CARDIAC_ARRHYTHMIA_COLUMN, DataType::Int8, false));

    let mut columns: Vec<ArrayRef> = Comorbidity::all()
        .iter()
        .map(|_| Arc::new(Int8Array::from(vec![0i8])) as ArrayRef)
        .collect();
    columns.push(Arc::new(Int8Array::from(vec![1i8])));

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?;

    // The string boundary accepts exactly the three published identifiers
    for name in ["van_walraven", "sid_30", "sid_29", "sid30"] {
        match name.parse::<ScoreMethod>() {
            Ok(method) => info!("'{name}' parsed as {method}"),
            Err(e) => warn!("'{name}' rejected: {e}"),
        }
    }

    // The cardiac arrhythmia term is defined for van_walraven and sid_30 only
    for method in ScoreMethod::all() {
        let calculator = ScoreCalculator::new(method).with_cardiac_arrhythmia(true);
        match calculator.compute(std::slice::from_ref(&batch)) {
            Ok(scores) => info!("{method} with cardiac arrhythmia: {scores:?}"),
            Err(e) => warn!("{method} with cardiac arrhythmia rejected: {e}"),
        }
    }

    Ok(())
}
