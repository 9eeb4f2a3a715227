use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Batch file renaming with composable rules",
        ));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rebatch"));
}

#[test]
fn test_version_subcommand() {
    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rebatch 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"\{"name":"rebatch","version":"0\.1\.0"\}"#).unwrap());
}

#[test]
fn test_run_command_missing_files() {
    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments"));
}

#[test]
fn test_run_command_without_rules_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("a.txt");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.arg("run")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to do"));

    file.assert(predicate::path::exists());
}

#[test]
fn test_run_command_renames_files_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.child("a.txt");
    let b = temp_dir.child("b.txt");
    a.touch().unwrap();
    b.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.args(["run", "--postfix", "_done"])
        .arg(a.path())
        .arg(b.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2]"))
        .stdout(predicate::str::contains("[2/2]"))
        .stdout(predicate::str::contains("(100%)"))
        .stdout(predicate::str::contains("Renamed 2 of 2 files"));

    temp_dir.child("a_done.txt").assert(predicate::path::exists());
    temp_dir.child("b_done.txt").assert(predicate::path::exists());
    a.assert(predicate::path::missing());
    b.assert(predicate::path::missing());
}

#[test]
fn test_run_command_prefix_and_replace() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("my holiday.txt");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.args(["run", "--prefix", "2024_", "--replace", " ", "--with", "_"])
        .arg(file.path())
        .assert()
        .success();

    temp_dir
        .child("2024_my_holiday.txt")
        .assert(predicate::path::exists());
}

#[test]
fn test_run_command_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("photo.png");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    let output = cmd
        .args(["run", "--postfix", "_edited", "--output", "json"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["outcome"], "finished");
    assert_eq!(json["summary"]["renamed"], 1);
    assert_eq!(json["summary"]["total"], 1);
}

#[test]
fn test_run_command_fails_fast_on_pattern_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.child("report_final_v2.txt");
    let b = temp_dir.child("notes.txt");
    let c = temp_dir.child("draft_final.txt");
    a.touch().unwrap();
    b.touch().unwrap();
    c.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.args(["run", "--keep", "final.*"])
        .arg(a.path())
        .arg(b.path())
        .arg(c.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("matched nothing"))
        .stderr(predicate::str::contains("notes.txt"));

    // The file before the failure is renamed; the rest are untouched.
    temp_dir.child("final_v2.txt").assert(predicate::path::exists());
    b.assert(predicate::path::exists());
    c.assert(predicate::path::exists());
}

#[test]
fn test_run_command_rejects_invalid_keep_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("a.txt");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.args(["run", "--keep", "([unclosed"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid rule configuration"));

    file.assert(predicate::path::exists());
}

#[test]
fn test_run_command_quiet_suppresses_progress() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("a.txt");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.args(["run", "--postfix", "_x", "--quiet"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_preview_command_does_not_touch_files() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("photo.png");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.args(["preview", "--postfix", "_edited", "--fixed-table-width", "--no-color"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("photo.png"))
        .stdout(predicate::str::contains("photo_edited.png"));

    file.assert(predicate::path::exists());
    temp_dir
        .child("photo_edited.png")
        .assert(predicate::path::missing());
}

#[test]
fn test_preview_command_summary_format() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("trip.jpg");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.args(["preview", "--prefix", "x_", "--preview", "summary", "--no-color"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[PREVIEW]"))
        .stdout(predicate::str::contains("Files: 1"))
        .stdout(predicate::str::contains("x_trip.jpg"));
}

#[test]
fn test_preview_command_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("a.txt");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    let output = cmd
        .args(["preview", "--postfix", "_v2", "--output", "json"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["operation"], "preview");
    assert_eq!(json["total"], 1);
    let new_path = json["renames"][0]["new_path"].as_str().unwrap();
    assert!(new_path.ends_with("a_v2.txt"));
}

#[test]
fn test_preview_command_reports_pattern_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("notes.txt");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.args(["preview", "--keep", "final.*"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("notes.txt"));
}

#[test]
fn test_directory_flag_changes_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.child("a.txt");
    file.touch().unwrap();

    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.arg("-C")
        .arg(temp_dir.path())
        .args(["run", "--postfix", "_x", "a.txt"])
        .assert()
        .success();

    temp_dir.child("a_x.txt").assert(predicate::path::exists());
}

#[test]
fn test_directory_flag_with_missing_directory_fails() {
    let mut cmd = Command::cargo_bin("rebatch").unwrap();
    cmd.arg("-C")
        .arg("/nonexistent/dir/for/rebatch")
        .args(["run", "--postfix", "_x", "a.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to change to directory"));
}
