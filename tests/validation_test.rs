//! Validation behavior: schema checks, domain checks, and error precedence

mod utils;

use std::sync::Arc;

use arrow::array::{ArrayRef, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use elix_score::{Comorbidity, ScoreError, ScoreMethod, compute_scores, validate_dataset};
use utils::{
    indicator_batch, indicator_batch_missing, indicator_batch_with_extra,
    indicator_batch_with_nulls,
};

#[test]
fn missing_required_column_is_a_schema_error() {
    let batch = indicator_batch_missing(1, "DEPRESS", &[]);
    let err = compute_scores(&[batch], ScoreMethod::VanWalraven, false).unwrap_err();
    match err {
        ScoreError::SchemaError(message) => {
            assert!(message.contains("DEPRESS"));
            // the full expected list is enumerated, with descriptions
            for comorbidity in Comorbidity::all() {
                assert!(message.contains(comorbidity.column_name()), "{comorbidity}");
            }
            assert!(message.contains("Congestive heart failure"));
        }
        other => panic!("expected SchemaError, got {other:?}"),
    }
}

#[test]
fn missing_column_reported_even_when_all_other_columns_are_valid() {
    let batch = indicator_batch_missing(3, "WGHTLOSS", &[("CHF", &[1, 0, 1])]);
    let err = compute_scores(&[batch], ScoreMethod::Sid30, false).unwrap_err();
    assert!(matches!(err, ScoreError::SchemaError(_)));
}

#[test]
fn non_binary_value_is_a_domain_error() {
    for bad in [2, -1, 100] {
        let batch = indicator_batch(1, &[("CHF", &[bad])]);
        let err = compute_scores(&[batch], ScoreMethod::VanWalraven, false).unwrap_err();
        assert!(
            matches!(err, ScoreError::DomainError(_)),
            "value {bad}: {err:?}"
        );
    }
}

#[test]
fn single_bad_cell_among_many_rows_aborts_the_whole_computation() {
    let mut values = vec![0; 100];
    values[57] = 2;
    let batch = indicator_batch(100, &[("LYTES", &values)]);

    let err = compute_scores(&[batch], ScoreMethod::Sid30, false).unwrap_err();
    match err {
        ScoreError::DomainError(message) => {
            assert!(message.contains("LYTES"));
            assert!(message.contains("57"));
        }
        other => panic!("expected DomainError, got {other:?}"),
    }
}

#[test]
fn null_indicator_is_a_domain_error() {
    let batch = indicator_batch_with_nulls("OBESE", &[Some(0), None]);
    let err = validate_dataset(&[batch], false).unwrap_err();
    assert!(matches!(err, ScoreError::DomainError(_)));
}

#[test]
fn string_indicator_column_is_a_domain_error() {
    let mut fields = Vec::new();
    let mut columns: Vec<ArrayRef> = Vec::new();
    for comorbidity in Comorbidity::all() {
        let name = comorbidity.column_name();
        if name == "CHF" {
            fields.push(Field::new(name, DataType::Utf8, false));
            columns.push(Arc::new(StringArray::from(vec!["yes"])));
        } else {
            fields.push(Field::new(name, DataType::Int32, false));
            columns.push(Arc::new(Int32Array::from(vec![0])));
        }
    }
    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).unwrap();

    let err = compute_scores(&[batch], ScoreMethod::VanWalraven, false).unwrap_err();
    match err {
        ScoreError::DomainError(message) => assert!(message.contains("CHF")),
        other => panic!("expected DomainError, got {other:?}"),
    }
}

#[test]
fn empty_dataset_is_a_schema_error() {
    let err = compute_scores(&[], ScoreMethod::VanWalraven, false).unwrap_err();
    assert!(matches!(err, ScoreError::SchemaError(_)));
}

#[test]
fn missing_cardiac_arrhythmia_column_is_a_schema_error_when_requested() {
    let batch = indicator_batch(1, &[]);
    let err = compute_scores(&[batch], ScoreMethod::VanWalraven, true).unwrap_err();
    match err {
        ScoreError::SchemaError(message) => assert!(message.contains("cardiac arrhythmia")),
        other => panic!("expected SchemaError, got {other:?}"),
    }
}

#[test]
fn cardiac_arrhythmia_values_are_only_validated_when_requested() {
    let batch = indicator_batch_with_extra(1, &[], &[("CARDARRH", &[7])]);

    // flag off: the invalid CARDARRH cell is neither validated nor summed
    let scores =
        compute_scores(std::slice::from_ref(&batch), ScoreMethod::VanWalraven, false).unwrap();
    assert_eq!(scores, vec![0]);

    // flag on: the same dataset is now a domain error
    let err =
        compute_scores(std::slice::from_ref(&batch), ScoreMethod::VanWalraven, true).unwrap_err();
    assert!(matches!(err, ScoreError::DomainError(_)));
}

#[test]
fn sid_29_with_cardiac_arrhythmia_is_rejected() {
    let batch = indicator_batch_with_extra(1, &[], &[("CARDARRH", &[1])]);
    let err = compute_scores(&[batch], ScoreMethod::Sid29, true).unwrap_err();
    match err {
        ScoreError::InvalidArgument(message) => assert!(message.contains("sid_29")),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn schema_errors_take_precedence_over_domain_errors() {
    // missing DEPRESS and an out-of-domain CHF cell: the column check fires first
    let batch = indicator_batch_missing(1, "DEPRESS", &[("CHF", &[2])]);
    let err = compute_scores(&[batch], ScoreMethod::VanWalraven, false).unwrap_err();
    assert!(matches!(err, ScoreError::SchemaError(_)));
}

#[test]
fn required_domain_checks_precede_cardiac_arrhythmia_presence() {
    // bad CHF cell and no CARDARRH column: the domain check on the required
    // columns fires before the optional-column presence check
    let batch = indicator_batch(1, &[("CHF", &[2])]);
    let err = compute_scores(&[batch], ScoreMethod::VanWalraven, true).unwrap_err();
    assert!(matches!(err, ScoreError::DomainError(_)));
}

#[test]
fn second_batch_is_validated_too() {
    let good = indicator_batch(1, &[]);
    let bad = indicator_batch(1, &[("TUMOR", &[3])]);
    let err = validate_dataset(&[good, bad], false).unwrap_err();
    match err {
        ScoreError::DomainError(message) => assert!(message.contains("batch 1")),
        other => panic!("expected DomainError, got {other:?}"),
    }
}

#[test]
fn extra_unrelated_columns_are_ignored() {
    let batch = indicator_batch_with_extra(1, &[("CHF", &[1])], &[("AGE", &[87])]);
    let scores = compute_scores(&[batch], ScoreMethod::VanWalraven, false).unwrap();
    assert_eq!(scores, vec![7]);
}
