//! Integration tests for the sand-cli commands.
#![allow(deprecated)] // Command::cargo_bin: macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sand() -> Command {
    Command::cargo_bin("sand").unwrap()
}

/// Write a config file into a fresh temp directory.
fn config_file(json: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sand.json");
    fs::write(&path, json).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_reports_header_and_counts() {
    sand()
        .args(["simulate", "--scene", "floor", "--frames", "5", "--width", "20", "--height", "10"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Simulation")
                .and(predicate::str::contains("'floor'"))
                .and(predicate::str::contains("5 frames, seed=42, 20x10"))
                .and(predicate::str::contains("20 cells live"))
                .and(predicate::str::contains("Material Counts"))
                .and(predicate::str::contains("IceCream")),
        );
}

#[test]
fn simulate_show_prints_frame() {
    sand()
        .args([
            "simulate", "--scene", "floor", "--frames", "0", "--width", "5", "--height", "3",
            "--show",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(".....\n.....\n#####"));
}

#[test]
fn simulate_pour_adds_material() {
    sand()
        .args([
            "simulate", "--scene", "basin", "--frames", "10", "--width", "9", "--height", "9",
            "--pour", "water", "--show",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Pouring")
                .and(predicate::str::contains("Water"))
                .and(predicate::str::contains("~")),
        );
}

#[test]
fn simulate_hourglass_is_deterministic() {
    let args = [
        "simulate", "--scene", "hourglass", "--frames", "40", "--width", "16", "--height", "12",
        "--pour", "sand", "--seed", "3", "--show",
    ];
    let first = sand().args(args).output().unwrap();
    let second = sand().args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn simulate_reads_config_file() {
    let (_dir, path) = config_file(r#"{ "seed": 7, "width": 12, "height": 6 }"#);
    sand()
        .args(["simulate", "--frames", "1", "--config", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed=7, 12x6"));
}

#[test]
fn simulate_flags_override_config_file() {
    let (_dir, path) = config_file(r#"{ "seed": 7, "width": 12, "height": 6 }"#);
    sand()
        .args(["simulate", "--frames", "1", "--config", &path, "--seed", "9", "--width", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed=9, 30x6"));
}

#[test]
fn simulate_json_prints_config() {
    sand()
        .args(["simulate", "--frames", "0", "--width", "4", "--height", "4", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"dither_step\"")
                .and(predicate::str::contains("\"width\": 4")),
        );
}

#[test]
fn simulate_rejects_invalid_config() {
    let (_dir, path) = config_file(r#"{ "width": 0 }"#);
    sand()
        .args(["simulate", "--config", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid grid dimensions"));
}

#[test]
fn simulate_rejects_malformed_json() {
    let (_dir, path) = config_file("{ not json");
    sand()
        .args(["simulate", "--config", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn simulate_missing_config_file() {
    sand()
        .args(["simulate", "--config", "/nonexistent/sand.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn simulate_unknown_scene() {
    sand()
        .args(["simulate", "--scene", "volcano"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scene"));
}

#[test]
fn simulate_unknown_pour_material() {
    sand()
        .args(["simulate", "--pour", "lava"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown material"));
}

#[test]
fn simulate_zero_height_fails() {
    sand()
        .args(["simulate", "--height", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid grid dimensions 160x0"));
}

// ---------------------------------------------------------------------------
// palette
// ---------------------------------------------------------------------------

#[test]
fn palette_lists_gradient_stops() {
    sand()
        .args(["palette", "sand", "--stops", "4"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Sand")
                .and(predicate::str::contains("granular"))
                .and(predicate::str::contains(" 3 ")),
        );
}

#[test]
fn palette_water_is_single_color() {
    sand()
        .args(["palette", "Water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#00BFFF").and(predicate::str::contains("fluid")));
}

#[test]
fn palette_block_shows_dark_mode_color() {
    sand()
        .args(["palette", "block"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#000000").and(predicate::str::contains("#F5F5F5")));
}

#[test]
fn palette_accepts_separated_names() {
    sand().args(["palette", "ice-cream"]).assert().success();
}

#[test]
fn palette_rejects_too_few_stops() {
    sand()
        .args(["palette", "sand", "--stops", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gradient_stops"));
}

#[test]
fn palette_unknown_material() {
    sand()
        .args(["palette", "lava"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown material"));
}

// ---------------------------------------------------------------------------
// materials
// ---------------------------------------------------------------------------

#[test]
fn materials_lists_every_brush() {
    sand()
        .arg("materials")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Peachy")
                .and(predicate::str::contains("Water"))
                .and(predicate::str::contains("Block"))
                .and(predicate::str::contains("Erase"))
                .and(predicate::str::contains("static"))
                .and(predicate::str::contains("6 brushes")),
        );
}
