//! Processing pipeline tests

mod basic_processing;
mod error_handling;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write an input CSV into the temp directory and return its path
pub fn write_input(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Minimal catalogue export with one bad SKU
pub fn sample_csv() -> &'static str {
    "Item no.,SKU\n\
     1001,NG216YB/9\n\
     1002,NG216BCRB/10H\n\
     1003,NG418CRB/12/RF\n\
     1004,invalid\n\
     1005,NG218CBCRB/11/CLIF\n"
}
