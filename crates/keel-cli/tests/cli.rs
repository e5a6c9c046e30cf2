//! Integration tests for the keel binary.
// cargo_bin is deprecated in favor of the cargo_bin! macro; both resolve the
// same binary.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// A keel command with the resolver's environment inputs cleared.
fn keel() -> Command {
    let mut cmd = Command::new(cargo_bin("keel"));
    cmd.env_remove("ANALYZE")
        .env_remove("KEEL_MODE")
        .env_remove("KEEL_ANALYZE")
        .env("NO_COLOR", "1");
    cmd
}

fn resolved_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run keel");
    assert!(output.status.success(), "keel failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn shows_help() {
    keel()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolve build configuration"));
}

#[test]
fn long_help_describes_output() {
    keel()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("emitted as JSON or TOML"));
}

#[test]
fn resolve_defaults_to_development() {
    let value = resolved_json(keel().arg("resolve"));
    assert_eq!(value["plugins"].as_array().unwrap().len(), 1);
    assert_eq!(value["plugins"][0]["name"], "@vitejs/plugin-react");
    assert_eq!(value["build"]["sourcemap"], false);
    assert_eq!(value["server"]["proxy"]["/api"]["target"], "http://localhost:4000");
}

#[test]
fn analyze_env_adds_visualizer_in_production() {
    let value = resolved_json(
        keel()
            .env("ANALYZE", "true")
            .args(["resolve", "--mode", "production"]),
    );
    let plugins = value["plugins"].as_array().unwrap();
    assert_eq!(plugins.len(), 2);
    assert_eq!(plugins[1]["name"], "rollup-plugin-visualizer");
    assert_eq!(plugins[1]["filename"], "./dist/bundle-analysis.html");
    assert_eq!(plugins[1]["gzipSize"], true);
    assert_eq!(plugins[1]["brotliSize"], true);
}

#[test]
fn analyze_env_is_ignored_in_development() {
    let value = resolved_json(keel().env("ANALYZE", "1").arg("resolve"));
    assert_eq!(value["plugins"].as_array().unwrap().len(), 1);
}

#[test]
fn keel_mode_env_selects_mode() {
    let value = resolved_json(
        keel()
            .env("KEEL_MODE", "production")
            .args(["resolve", "--analyze"]),
    );
    assert_eq!(value["plugins"].as_array().unwrap().len(), 2);
}

#[test]
fn resolve_writes_toml_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("keel.toml");

    keel()
        .args(["resolve", "--format", "toml", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("[build]"));
    assert!(written.contains("cssMinify = true"));
}

#[test]
fn resolve_reports_unwritable_output() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("missing-dir").join("keel.json");

    keel()
        .args(["resolve", "--output"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn asset_name_routes_by_extension() {
    keel()
        .args(["asset-name", "logo.png", "Inter.woff2", "data.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "logo.png\tassets/images/[name]-[hash][extname]",
        ))
        .stdout(predicate::str::contains(
            "Inter.woff2\tassets/fonts/[name]-[hash][extname]",
        ))
        .stdout(predicate::str::contains(
            "data.json\tassets/[name]-[hash][extname]",
        ));
}

#[test]
fn sanitize_prints_one_name_per_line() {
    keel()
        .args(["sanitize", "a b/c.js", "ok-name.js"])
        .assert()
        .success()
        .stdout("a_b_c.js\nok-name.js\n");
}

#[test]
fn check_validates_default_targets() {
    keel()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("development"))
        .stdout(predicate::str::contains("production (analyze)"));
}

#[test]
fn check_honors_no_color_flag() {
    keel()
        .env_remove("NO_COLOR")
        .env("FORCE_COLOR", "1")
        .args(["--no-color", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());

    keel()
        .env_remove("NO_COLOR")
        .env("FORCE_COLOR", "1")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn check_single_mode() {
    keel()
        .args(["check", "--mode", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staging"));
}
