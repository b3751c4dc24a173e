use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SEED: &str = "2024-01-01,income,1000,USD,Salary\n\
2024-01-01,expense,300,USD,Rent\n\
2024-01-15,income,50,USD,Gift\n";

fn wallet(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wallet").unwrap();
    cmd.env("WALLET_CLI_DATA_DIR", data_dir)
        .env_remove("WALLET_FILE")
        .env_remove("WALLET_LOG");
    cmd
}

fn seeded() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("records.txt");
    fs::write(&file, SEED).unwrap();
    (temp_dir, file)
}

#[test]
fn balance_of_seeded_file() {
    let (temp_dir, file) = seeded();

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .arg("balance")
        .assert()
        .success()
        .stdout("Balance:  750.00\nIncome:   1050.00\nExpenses: 300.00\n");
}

#[test]
fn missing_file_is_not_created_by_reads() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("missing.txt");

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:  0.00"))
        .stderr(predicate::str::contains("not found"));

    assert!(!file.exists());
}

#[test]
fn add_appends_a_line() {
    let (temp_dir, file) = seeded();

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["add", "12.5", "--category", "expense", "--date", "2024-02-01"])
        .args(["--currency", "EUR", "--description", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record:      #3"));

    let contents = fs::read_to_string(&file).unwrap();
    assert_eq!(
        contents,
        format!("{}2024-02-01,expense,12.5,EUR,Lunch\n", SEED)
    );
}

#[test]
fn add_uses_default_currency_from_settings() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"default_currency": "RUB"}"#,
    )
    .unwrap();

    wallet(temp_dir.path())
        .args(["add", "100", "-c", "income", "-d", "2024-06-01"])
        .assert()
        .success();

    let contents = fs::read_to_string(temp_dir.path().join("records.txt")).unwrap();
    assert_eq!(contents, "2024-06-01,income,100,RUB,\n");
}

#[test]
fn add_rejects_invalid_category() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("records.txt");

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["add", "100", "--category", "salary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category: 'salary'"));

    assert!(!file.exists());
}

#[test]
fn add_rejects_comma_in_description() {
    let (temp_dir, file) = seeded();

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["add", "5", "-c", "expense", "-m", "bread, milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot contain"));

    assert_eq!(fs::read_to_string(&file).unwrap(), SEED);
}

#[test]
fn edit_changes_only_given_fields() {
    let (temp_dir, file) = seeded();

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["edit", "0", "--description", "Monthly salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: Monthly salary"));

    let contents = fs::read_to_string(&file).unwrap();
    assert!(contents.starts_with("2024-01-01,income,1000,USD,Monthly salary\n"));
}

#[test]
fn out_of_range_indices_leave_file_untouched() {
    let (temp_dir, file) = seeded();

    for args in [
        vec!["delete", "-1"],
        vec!["delete", "3"],
        vec!["edit", "-1", "-m", "x"],
        vec!["edit", "3", "-m", "x"],
    ] {
        wallet(temp_dir.path())
            .arg("--file")
            .arg(&file)
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid index"));

        assert_eq!(fs::read_to_string(&file).unwrap(), SEED);
    }
}

#[test]
fn delete_shifts_later_records() {
    let (temp_dir, file) = seeded();

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""index": 0"#))
        .stdout(predicate::str::contains(r#""description": "Rent""#))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn search_requires_every_criterion() {
    let (temp_dir, file) = seeded();

    let output = wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["search", "--category", "income", "--date", "2024-01-01", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let hits: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["index"], 0);
    assert_eq!(hits[0]["description"], "Salary");
}

#[test]
fn search_without_matches_is_not_an_error() {
    let (temp_dir, file) = seeded();

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["search", "--amount", "999"])
        .assert()
        .success()
        .stdout("No records found.\n");
}

#[test]
fn malformed_lines_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("records.txt");
    fs::write(
        &file,
        "2024-01-01,income,100,USD,Salary\n2024-01-02,expense,50,USD\n",
    )
    .unwrap();

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:   100.00"))
        .stdout(predicate::str::contains("Expenses: 0.00"));
}

#[test]
fn interactive_menu_session() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("records.txt");

    wallet(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .write_stdin("2\n2024-06-01\nincome\n5000\nUSD\nSalary\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("Balance:  5000.00"))
        .stdout(predicate::str::contains("Goodbye."));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "2024-06-01,income,5000,USD,Salary\n"
    );
}

#[test]
fn config_reports_paths() {
    let temp_dir = TempDir::new().unwrap();

    wallet(temp_dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records.txt"))
        .stdout(predicate::str::contains("Default currency: USD"));

    assert!(temp_dir.path().join("config.json").exists());
    assert!(!temp_dir.path().join("records.txt").exists());
}
