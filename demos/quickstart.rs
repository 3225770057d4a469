//! Score a small in-memory indicator table with all three methods.

use std::sync::Arc;

use arrow::array::{ArrayRef, Int8Array};
use arrow::record_batch::RecordBatch;
use elix_score::{ScoreMethod, compute_scores, elixhauser_schema, with_score_column};
use log::info;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Three patients: one with CHF + DRUG + METS, one with LYTES only, one
    // with no comorbidities at all.
    let schema = elixhauser_schema();
    let columns: Vec<ArrayRef> = schema
        .fields()
        .iter()
        .map(|field| {
            let values: Vec<i8> = match field.name().as_str() {
                "CHF" | "DRUG" | "METS" => vec![1, 0, 0],
                "LYTES" => vec![0, 1, 0],
                _ => vec![0, 0, 0],
            };
            Arc::new(Int8Array::from(values)) as ArrayRef
        })
        .collect();
    let batch = RecordBatch::try_new(schema, columns)?;

    info!("Scoring {} patients", batch.num_rows());
    for method in ScoreMethod::all() {
        let scores = compute_scores(std::slice::from_ref(&batch), method, false)?;
        info!("{method} scores: {scores:?}");
    }

    // Append the default-method scores as a new column
    let scores = compute_scores(std::slice::from_ref(&batch), ScoreMethod::default(), false)?;
    let scored = with_score_column(&batch, &scores, "ELIX_SCORE")?;
    info!(
        "Appended score column; batch now has {} columns",
        scored.num_columns()
    );

    Ok(())
}
