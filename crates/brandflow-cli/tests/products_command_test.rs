mod common;
use common::TestFixture;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_product_table_json() {
    let fixture = TestFixture::new();
    let result = fixture.json(&["products"]);

    let content = &result["content"];
    assert_eq!(content["rows"].as_array().unwrap().len(), 5);
    assert_eq!(content["score_label"], "UPS");
    assert_eq!(content["headers"][0], "Product");
    assert_eq!(result["badge"]["level"], "success");
}

#[test]
fn test_store_flag_switches_score() {
    let fixture = TestFixture::new();
    let result = fixture.json(&["products", "--store", "amazon"]);

    assert_eq!(result["content"]["score_label"], "APS");
    assert_eq!(result["content"]["score_title"], "Amazon Performance Score");
}

#[test]
fn test_preset_limits_columns() {
    let fixture = TestFixture::new();
    let result = fixture.json(&["products", "--preset", "advertising"]);

    let headers: Vec<&str> = result["content"]["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h.as_str().unwrap())
        .collect();
    assert!(headers.contains(&"ACoS"));
    assert!(!headers.contains(&"Page Views"));
    assert_eq!(result["content"]["preset"], "Advertising");
}

#[test]
fn test_sort_label_is_reported() {
    let fixture = TestFixture::new();
    let result = fixture.json(&["products", "--sort", "price", "--desc"]);
    assert_eq!(result["content"]["sort"], "price desc");
}

#[test]
fn test_unknown_sort_column_fails() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["products", "--sort", "margin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown column 'margin'"));
}

#[test]
fn test_export_to_stdout_is_csv() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .args(["export", "--preset", "revenue"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut reader = csv::Reader::from_reader(stdout.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "Product");
    assert_eq!(reader.records().count(), 5);
}

#[test]
fn test_export_to_file_reports_path() {
    let fixture = TestFixture::new();
    let path = fixture.data_dir().join("products.csv");

    fixture
        .command()
        .args(["export", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Export complete"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Product,"));
}
