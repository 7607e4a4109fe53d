//! Basic processing integration tests

use super::{sample_csv, write_input};
use crate::config::ProcessorConfig;
use crate::processor::SkuFileProcessor;
use std::fs;
use tempfile::TempDir;

fn quiet_config() -> ProcessorConfig {
    ProcessorConfig::default()
        .with_progress(false)
        .with_log_file(None)
}

#[test]
fn test_basic_processing_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", sample_csv());
    let output_path = temp_dir.path().join("output.csv");

    let processor = SkuFileProcessor::new(input_path.clone(), output_path.clone())
        .unwrap()
        .with_config(quiet_config());
    let stats = processor.process().unwrap();

    assert_eq!(stats.rows_processed, 5);
    assert_eq!(stats.skus_parsed, 4);
    assert_eq!(stats.skus_unparsed, 1);
    assert_eq!(stats.input_path, input_path);
    assert_eq!(stats.output_path, output_path);

    let output = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = output.split("\r\n").filter(|l| !l.is_empty()).collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "Item no.,SKU,Class,Length,Length UOM,Cuff Style,Color,Size,RFID,EXTRA"
    );
    assert_eq!(
        lines[1],
        "1001,NG216YB/9,2,16,inch,Straight Cuff,Yellow/Black,9,No,"
    );
    assert_eq!(
        lines[2],
        "1002,NG216BCRB/10H,2,16,inch,Bell Cuff,Red/Black,10H,No,"
    );
    assert_eq!(
        lines[3],
        "1003,NG418CRB/12/RF,4,18,inch,Contour Cuff,Red/Black,12,Yes,"
    );
    assert_eq!(lines[4], "1004,invalid,,,,,,,,");
    assert_eq!(
        lines[5],
        "1005,NG218CBCRB/11/CLIF,2,18,inch,Contour Bell Cuff,Red/Black,11,No,CLIF"
    );
}

#[test]
fn test_custom_sku_column() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(
        &temp_dir,
        "input.csv",
        "SKU_CODE,Qty\nNG216BCBYB/10,3\n",
    );
    let output_path = temp_dir.path().join("parsed_output.csv");

    let stats = SkuFileProcessor::new(input_path, output_path.clone())
        .unwrap()
        .with_config(quiet_config().with_sku_column("SKU_CODE"))
        .process()
        .unwrap();

    assert_eq!(stats.rows_processed, 1);
    assert_eq!(stats.skus_parsed, 1);

    let output = fs::read_to_string(&output_path).unwrap();
    assert!(output.contains("NG216BCBYB/10,3,2,16,inch,Bell Cuff,Black/Yellow/Black,10,No,"));
}

#[test]
fn test_header_only_input_writes_header() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", "Item no.,SKU\n");
    let output_path = temp_dir.path().join("output.csv");

    let stats = SkuFileProcessor::new(input_path, output_path.clone())
        .unwrap()
        .with_config(quiet_config())
        .process()
        .unwrap();

    assert_eq!(stats.rows_processed, 0);
    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        output,
        "Item no.,SKU,Class,Length,Length UOM,Cuff Style,Color,Size,RFID,EXTRA\r\n"
    );
}

#[test]
fn test_colliding_column_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", "SKU,RFID\nNG418CRB/12/RF,no tag\n");
    let output_path = temp_dir.path().join("output.csv");

    SkuFileProcessor::new(input_path, output_path.clone())
        .unwrap()
        .with_config(quiet_config())
        .process()
        .unwrap();

    let output = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = output.split("\r\n").filter(|l| !l.is_empty()).collect();
    let header: Vec<&str> = lines[0].split(',').collect();
    assert_eq!(header.len(), 2 + 8);
    assert_eq!(lines[1], "NG418CRB/12/RF,Yes,4,18,inch,Contour Cuff,Red/Black,12,Yes,");
    assert!(!output.contains("no tag"));
}

#[test]
fn test_repeated_input_columns_are_all_written() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", "SKU,Note,Note\nNG216YB/9,a,b\n");
    let output_path = temp_dir.path().join("output.csv");

    SkuFileProcessor::new(input_path, output_path.clone())
        .unwrap()
        .with_config(quiet_config())
        .process()
        .unwrap();

    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        output,
        "SKU,Note,Note,Class,Length,Length UOM,Cuff Style,Color,Size,RFID,EXTRA\r\n\
         NG216YB/9,b,b,2,16,inch,Straight Cuff,Yellow/Black,9,No,\r\n"
    );
}

#[test]
fn test_output_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = write_input(&temp_dir, "input.csv", sample_csv());
    let output_path = temp_dir.path().join("output.csv");
    fs::write(&output_path, "stale content that is much longer than nothing\n").unwrap();

    SkuFileProcessor::new(input_path, output_path.clone())
        .unwrap()
        .with_config(quiet_config())
        .process()
        .unwrap();

    let output = fs::read_to_string(&output_path).unwrap();
    assert!(output.starts_with("Item no.,SKU,"));
    assert!(!output.contains("stale"));
}
