//! End-to-end tests for the workbench binary

use assert_cmd::Command;
use predicates::prelude::*;

/// Build a command isolated from any configuration on the host
fn workbench(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("workbench").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("WORKBENCH_BUCKET");
    cmd
}

#[test]
fn show_resolves_the_synthetic_scenario() {
    let temp = tempfile::tempdir().unwrap();

    workbench(temp.path())
        .args(["--scenario", "synthetic", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("synthetic-model"))
        .stdout(predicate::str::contains("synthetic-scheduler"))
        .stdout(predicate::str::contains(
            "smarter-anomaly-detection-synth/training-data/",
        ));
}

#[test]
fn show_warns_about_the_placeholder_bucket() {
    let temp = tempfile::tempdir().unwrap();

    workbench(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("<<YOUR_BUCKET>>"))
        .stdout(predicate::str::contains("Replace the bucket placeholder"));
}

#[test]
fn show_json_emits_the_full_contract() {
    let temp = tempfile::tempdir().unwrap();

    let output = workbench(temp.path())
        .args(["--bucket", "demo-bucket", "show", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(config["bucket"], "demo-bucket");
    assert_eq!(config["dataset_name"], "water-pump");
    assert_eq!(config["model_name"], "water-pump-model");
    assert_eq!(config["inference_scheduler_name"], "water-pump-scheduler");
    assert_eq!(
        config["prefixes"]["inference"],
        "smarter-anomaly-detection/inference-data"
    );
}

#[test]
fn init_writes_a_scaffold_and_respects_force() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("workbench.json");

    workbench(temp.path())
        .args(["--scenario", "synthetic", "init", "--output"])
        .arg(&path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    let scaffold: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(scaffold["scenario"], "synthetic");
    assert_eq!(scaffold["bucket"], "<<YOUR_BUCKET>>");
    assert_eq!(scaffold["dataset_name"], "synthetic");

    // A second init must not clobber the file silently
    workbench(temp.path())
        .args(["init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    workbench(temp.path())
        .args(["init", "--force", "--output"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn scenarios_lists_both_built_ins() {
    let temp = tempfile::tempdir().unwrap();

    workbench(temp.path())
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("water-pump"))
        .stdout(predicate::str::contains("synthetic"))
        .stdout(predicate::str::contains("water-pump-scheduler"));
}

#[test]
fn unknown_scenarios_fail_loudly() {
    let temp = tempfile::tempdir().unwrap();

    workbench(temp.path())
        .args(["--scenario", "turbine", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for field 'scenario'"));
}

#[test]
fn a_config_file_in_the_working_directory_is_picked_up() {
    let temp = tempfile::tempdir().unwrap();
    let config_path = temp.path().join("workbench.json");
    std::fs::write(
        &config_path,
        r#"{"scenario": "water-pump", "bucket": "cwd-bucket"}"#,
    )
    .unwrap();

    workbench(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("s3://cwd-bucket/"));
}
