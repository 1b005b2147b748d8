//! End-to-end tests for the invcheck binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn invcheck() -> Command {
    Command::cargo_bin("invcheck").unwrap()
}

#[test]
fn check_reports_counts_and_remaining() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.csv");
    fs::write(
        &input,
        "Particulars,Qty,Rate,Value\nTomato Ketchup,2,45.00,90.00\nRice Bag,1,450.00,450.00\n",
    )
    .unwrap();

    invcheck()
        .arg("check")
        .arg(&input)
        .arg("--mark")
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 total, 1 verified, 1 remaining"))
        .stdout(predicate::str::contains("[x] #0"))
        .stdout(predicate::str::contains("Tomato Ketchup"));
}

#[test]
fn check_exports_csv_with_verified_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "Item,Qty,Rate,Value\nMilk,1,25,25\n").unwrap();

    invcheck()
        .arg("check")
        .arg(&input)
        .arg("--mark-all")
        .arg("--format")
        .arg("csv")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let exported = fs::read_to_string(&output).unwrap();
    assert!(exported.contains("Particulars,Qty,Rate,Value,Verified"));
    assert!(exported.contains("Milk,1,25,25,true"));
}

#[test]
fn check_fails_without_name_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.csv");
    fs::write(&input, "Qty,Rate,Value\n2,45.00,90.00\n").unwrap();

    invcheck()
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no particulars/item column"));
}

#[test]
fn extract_parses_receipt_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ocr.txt");
    fs::write(
        &input,
        "Super Mart\nTomato Ketchup 2 45.00 90.00\nRice Bag\nTOTAL 135.00\n",
    )
    .unwrap();

    invcheck()
        .arg("extract")
        .arg(&input)
        .arg("--show-unparsed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomato Ketchup"))
        .stdout(predicate::str::contains("1 total"))
        .stderr(predicate::str::contains("Rice Bag"));
}

#[test]
fn extract_warns_on_empty_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ocr.txt");
    fs::write(&input, "TOTAL 135.00\nThank you!\n").unwrap();

    invcheck()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("No items could be extracted"));
}

#[test]
fn no_trim_keeps_cell_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.csv");
    fs::write(&input, "Item,Qty,Rate,Value\n  Milk  ,1,25,25\n").unwrap();

    invcheck()
        .arg("check")
        .arg(&input)
        .arg("--no-trim")
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("  Milk  ,1,25,25,false"));

    // Default run trims the same cell.
    invcheck()
        .arg("check")
        .arg(&input)
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nMilk,1,25,25,false"));
}

#[test]
fn no_fill_reports_empty_numeric_cells() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.csv");
    fs::write(&input, "Item,Qty,Rate,Value\nSugar,,40,\n").unwrap();

    invcheck()
        .arg("check")
        .arg(&input)
        .arg("--no-fill")
        .assert()
        .success()
        .stderr(predicate::str::contains("Empty numeric cells:"))
        .stderr(predicate::str::contains("row 0: Qty"))
        .stderr(predicate::str::contains("row 0: Value"));

    // Default run fills silently.
    invcheck()
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Empty numeric cells").not());
}

#[test]
fn config_init_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invcheck.json");

    invcheck()
        .arg("config")
        .arg("init")
        .arg(&path)
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("drop_duplicates"));

    invcheck()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fill_missing\": true"));
}

#[test]
fn search_narrows_output_but_export_keeps_all_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.csv");
    fs::write(
        &input,
        "Item,Qty,Rate,Value\nMilk,1,25,25\nBread,1,30,30\n",
    )
    .unwrap();

    invcheck()
        .arg("check")
        .arg(&input)
        .arg("--search")
        .arg("milk")
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Bread").not())
        // Counts cover the full dataset, not the filtered view.
        .stdout(predicate::str::contains("2 total"));
}
