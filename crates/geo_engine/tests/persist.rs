use std::fs;

use geo_engine::{ensure_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_target_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("exports").join("nested");
    assert!(!new_dir.exists());

    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path());

    let first = writer.write("report.csv", "a,b").unwrap();
    assert_eq!(first.file_name().unwrap(), "report.csv");
    assert_eq!(fs::read_to_string(&first).unwrap(), "a,b");

    let second = writer.write("report.csv", "c,d").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "c,d");
}

#[test]
fn file_in_place_of_dir_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("report.csv", "data").is_err());
    assert!(!file_path.with_file_name("report.csv").exists());
}
