use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn readout_shows_exact_ratio_for_special_angle() {
    Command::cargo_bin("radial_velocity")
        .expect("radial_velocity bin")
        .args(["--angle", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("V_los ≈ 0.1"))
        .stdout(predicate::str::contains("cos φ = cos 30° = √3/2"))
        .stdout(predicate::str::contains("v_los ≈ -0.8"));
}

#[test]
fn readout_accepts_negative_angles_and_sine_convention() {
    Command::cargo_bin("radial_velocity")
        .expect("radial_velocity bin")
        .args(["--angle", "-300", "--convention", "sine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sin φ = sin 30° = 1/2"));
}

#[test]
fn json_snapshot_to_stdout() {
    Command::cargo_bin("radial_velocity")
        .expect("radial_velocity bin")
        .args(["--angle", "45", "--json", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"line_of_sight\""))
        .stdout(predicate::str::contains("Line-of-sight speeds").not());
}

#[test]
fn invalid_scenario_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[system]\nobserver = [0.0, 0.0]\n").expect("write");

    Command::cargo_bin("radial_velocity")
        .expect("radial_velocity bin")
        .args(["--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line of sight is undefined"));
}

#[test]
fn sweep_writes_csv_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("sweep.csv");

    Command::cargo_bin("rv_sweep")
        .expect("rv_sweep bin")
        .args([
            "--start",
            "0",
            "--end",
            "360",
            "--step",
            "15",
            "--output",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&csv_path).expect("csv");
    assert_eq!(reader.records().count(), 25);
}

#[test]
fn sweep_rejects_infinite_or_oversized_ranges() {
    Command::cargo_bin("rv_sweep")
        .expect("rv_sweep bin")
        .args(["--end", "inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be finite"));

    Command::cargo_bin("rv_sweep")
        .expect("rv_sweep bin")
        .args(["--end", "1e12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("the limit is"));
}

#[test]
fn plot_prints_colour_key_on_request() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png_path = dir.path().join("orbit.png");

    Command::cargo_bin("rv_plot")
        .expect("rv_plot bin")
        .args([
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "200",
            "--height",
            "200",
            "--legend",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- royal blue dot: planet"))
        .stdout(predicate::str::contains("- red arrow: star line-of-sight velocity V_los"));
}

#[test]
fn sweep_rejects_non_positive_step() {
    Command::cargo_bin("rv_sweep")
        .expect("rv_sweep bin")
        .args(["--step", "0"])
        .assert()
        .failure();
}

#[test]
fn plot_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png_path = dir.path().join("figures/orbit.png");

    Command::cargo_bin("rv_plot")
        .expect("rv_plot bin")
        .args([
            "--angle",
            "30",
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "300",
            "--height",
            "300",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}
