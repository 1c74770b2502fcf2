use assert_cmd::Command;
use serde_json::Value;

fn stdout_of(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("kira-dpcrqc").unwrap();
    cmd.args(args);
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn run_demo_plate() {
    let s = stdout_of(&["run"]);
    assert!(s.contains("Plate: 3 wells, 15 readings, threshold=20"));
    assert!(s.contains("Above threshold: 4/15"));
    assert!(s.contains("Outliers: none"));
}

#[test]
fn run_no_outliers() {
    let s = stdout_of(&["run", "--no-outliers"]);
    assert!(!s.contains("Outliers"));
}

#[test]
fn run_json_stdout_only_report() {
    let s = stdout_of(&["run", "--json"]);
    let json: Value = serde_json::from_str(&s).unwrap();
    assert_eq!(json["stats"]["total_values"], 15);
}

#[test]
fn run_custom_wells() {
    let s = stdout_of(&[
        "run",
        "--well",
        "A=1,2,3,4",
        "--well",
        "B=5,6,7,100",
        "--threshold",
        "4",
    ]);
    assert!(s.contains("Plate: 2 wells, 8 readings, threshold=4"));
    assert!(s.contains("Outliers: 100"));
}

#[test]
fn run_saturated_plate_fails() {
    let mut cmd = Command::cargo_bin("kira-dpcrqc").unwrap();
    cmd.args(["run", "--well", "A=25,30"]);
    cmd.assert().failure();
}

#[test]
fn run_bad_well_spec_fails() {
    let mut cmd = Command::cargo_bin("kira-dpcrqc").unwrap();
    cmd.args(["run", "--well", "A=1,two"]);
    cmd.assert().failure();
}

#[test]
fn estimate_direct() {
    let s = stdout_of(&["estimate", "--positive", "3", "--total", "15"]);
    assert!(s.contains("lambda: 0.223144"));
    assert!(s.contains("Copies/uL: "));
}

#[test]
fn estimate_saturated_fails() {
    let mut cmd = Command::cargo_bin("kira-dpcrqc").unwrap();
    cmd.args(["estimate", "--positive", "5", "--total", "5"]);
    cmd.assert().failure();
}

#[test]
fn plate_show_demo() {
    let s = stdout_of(&["plate", "show"]);
    assert!(s.contains("plate (3 wells, 15 readings):"));
    assert!(s.contains("Row 1\t5\t0\t15"));
    assert!(s.contains("Row 3\t5\t0\t56"));
}

#[test]
fn plate_show_empty_well() {
    let s = stdout_of(&["plate", "show", "--well", "A="]);
    assert!(s.contains("A\t0\t-\t-"));
}
