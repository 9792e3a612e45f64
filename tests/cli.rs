// End-to-end tests for the basket binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn worked_example() -> NamedTempFile {
    dataset("A B C\nA B\nA C\nA\nB C\n")
}

fn basket() -> Command {
    Command::cargo_bin("basket").unwrap()
}

#[test]
fn test_apriori_text_report() {
    let data = worked_example();
    basket()
        .arg("-s")
        .arg("2")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 5"))
        .stdout(predicate::str::contains("{A} : 4"))
        .stdout(predicate::str::contains("{A, B} : 2"))
        .stdout(predicate::str::contains("level 3: 1 candidates, 0 frequent"))
        .stdout(predicate::str::contains("Frequent 3-itemsets").not());
}

#[test]
fn test_fp_growth_prints_tree() {
    let data = worked_example();
    basket()
        .args(["-a", "fp-growth", "-s", "2", "--tree"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Header table:\nA 4\nB 3\nC 3\n"))
        .stdout(predicate::str::contains("C:1 -> C:1 -> C:1"))
        .stdout(predicate::str::contains("{B, C} : 2"));
}

#[test]
fn test_both_algorithms_agree() {
    let data = dataset("1 2 3 4\n1 2 4\n2 3\n1 2 3\n4 2\n1 3\n");
    basket()
        .args(["-a", "both", "-s", "2", "--items", "integer"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("apriori and fp-growth agree"));
}

#[test]
fn test_both_algorithms_at_zero_threshold() {
    let data = dataset("1 2\n3\n");
    basket()
        .args(["-a", "both", "-s", "0", "--items", "integer"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("{1, 3} : 0"))
        .stdout(predicate::str::contains(
            "apriori and fp-growth agree on itemsets with non-zero support",
        ));
}

#[test]
fn test_json_output() {
    let data = worked_example();
    let output = basket()
        .args(["--format", "json", "-s", "2"])
        .arg(data.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["transactions"], 5);
    assert_eq!(value["levels"].as_array().unwrap().len(), 2);
    assert_eq!(value["levels"][1]["itemsets"][0]["items"][1], "B");
}

#[test]
fn test_config_file_with_override() {
    let data = worked_example();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "min_support = 5\nmax_level = 1").unwrap();

    // The file alone finds nothing at support 5.
    basket()
        .arg("--config")
        .arg(config.path())
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("{A}").not());

    // The flag wins over the file, the file still caps the level.
    basket()
        .arg("--config")
        .arg(config.path())
        .args(["-s", "2"])
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("{A} : 4"))
        .stdout(predicate::str::contains("{A, B}").not());
}

#[test]
fn test_missing_threshold_fails() {
    let data = worked_example();
    basket()
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("support threshold is required"));
}

#[test]
fn test_missing_dataset_fails() {
    basket()
        .args(["-s", "1", "/no/such/dataset.dat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable"));
}
