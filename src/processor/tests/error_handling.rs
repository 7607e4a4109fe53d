//! Error handling integration tests

use super::{sample_csv, write_input};
use crate::config::ProcessorConfig;
use crate::error::SkuError;
use crate::processor::SkuFileProcessor;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_nonexistent_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("missing.csv");
    let output_path = temp_dir.path().join("output.csv");

    match SkuFileProcessor::new(input_path.clone(), output_path).unwrap_err() {
        SkuError::InputNotFound { path } => assert_eq!(path, input_path),
        other => panic!("Expected InputNotFound error, got {:?}", other),
    }
}

#[test]
fn test_input_is_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.csv");

    let result = SkuFileProcessor::new(temp_dir.path().to_path_buf(), output_path);
    assert!(matches!(result, Err(SkuError::InputIsDirectory { .. })));
}

#[test]
fn test_missing_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", sample_csv());
    let output_path = temp_dir.path().join("nowhere").join("output.csv");

    match SkuFileProcessor::new(input_path, output_path).unwrap_err() {
        SkuError::OutputDirectoryNotFound { path } => {
            assert!(path.ends_with("nowhere"));
        }
        other => panic!("Expected OutputDirectoryNotFound error, got {:?}", other),
    }
}

#[test]
fn test_missing_sku_column() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", "Item no.,Code\n1,NG216YB/9\n");
    let output_path = temp_dir.path().join("output.csv");

    let result = SkuFileProcessor::new(input_path, output_path.clone())
        .unwrap()
        .with_config(ProcessorConfig::default().with_progress(false))
        .process();

    match result {
        Err(SkuError::SkuColumnNotFound { column, available }) => {
            assert_eq!(column, "SKU");
            assert_eq!(available, "Item no., Code");
        }
        other => panic!("Expected SkuColumnNotFound error, got {:?}", other),
    }
    assert!(!output_path.exists());
}

#[test]
fn test_empty_file_has_no_sku_column() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", "");
    let output_path = temp_dir.path().join("output.csv");

    let result = SkuFileProcessor::new(input_path, output_path.clone())
        .unwrap()
        .with_config(ProcessorConfig::default().with_progress(false))
        .process();

    assert!(matches!(result, Err(SkuError::SkuColumnNotFound { .. })));
    assert!(!output_path.exists());
}

#[test]
fn test_ragged_rows_fail_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", "SKU,Qty\nNG216YB/9,1\nNG216YB/9\n");
    let output_path = temp_dir.path().join("output.csv");

    let result = SkuFileProcessor::new(input_path, output_path)
        .unwrap()
        .with_config(ProcessorConfig::default().with_progress(false))
        .process();

    assert!(matches!(result, Err(SkuError::Csv(_))));
}

#[test]
fn test_invalid_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", sample_csv());
    let output_path = temp_dir.path().join("output.csv");

    let result = SkuFileProcessor::new(input_path, output_path)
        .unwrap()
        .with_config(ProcessorConfig::default().with_sku_column(""))
        .process();

    assert!(matches!(result, Err(SkuError::Configuration { .. })));
}

#[test]
fn test_unparseable_skus_do_not_fail_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", "SKU\nfoo\nbar\n");
    let output_path = temp_dir.path().join("output.csv");

    let stats = SkuFileProcessor::new(input_path, output_path.clone())
        .unwrap()
        .with_config(ProcessorConfig::default().with_progress(false))
        .process()
        .unwrap();

    assert_eq!(stats.rows_processed, 2);
    assert_eq!(stats.skus_unparsed, 2);
    assert_eq!(stats.parse_rate(), 0.0);
    assert!(fs::read_to_string(&output_path).unwrap().contains("foo,,,,,,,,"));
}
