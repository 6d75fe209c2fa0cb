//! End-to-end tests for the CLI commands.
//!
//! Each test:
//! 1. Creates a temp directory
//! 2. Copies the profile fixture into it (or not, for failure cases)
//! 3. Runs a `profile-api` command there
//! 4. Asserts exit code + expected output and files

// Allow deprecated cargo_bin usage until assert_cmd updates API
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Manifest directory (project root).
fn manifest_dir() -> &'static str {
    env!("CARGO_MANIFEST_DIR")
}

/// Copy the sample profile into a temp directory as `profile.md`.
fn setup_profile_project() -> TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    let fixture = format!("{}/fixtures/profiles/sample.md", manifest_dir());
    fs::copy(&fixture, dir.path().join("profile.md")).expect("copy fixture");
    dir
}

/// Build a command pointing at the tempdir.
fn profile_api(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("profile-api").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read output")).expect("valid json")
}

// ─── build ──────────────────────────────────────────────────────────────────

#[test]
fn e2e_build_defaults() {
    let dir = setup_profile_project();
    profile_api(&dir)
        .arg("build")
        .arg("--date")
        .arg("2026-02-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files\":10"));

    let api = dir.path().join("api");
    for endpoint in [
        "identity",
        "narrative",
        "thesis",
        "accomplishments",
        "stats",
        "experience",
        "seeking",
        "culture-fit",
        "skills",
        "index",
    ] {
        assert!(api.join(format!("{endpoint}.json")).exists(), "{endpoint}.json");
    }

    let stats = read_json(&api.join("stats.json"));
    assert_eq!(stats["meta"]["endpoint"], "stats");
    assert_eq!(stats["meta"]["last_updated"], "2026-02-01");
    assert_eq!(stats["data"]["key_stats"][0]["stat"], "$50M+");
    assert_eq!(stats["data"]["key_stats"][1]["context"], "ROI");
    assert_eq!(
        stats["data"]["headline_accomplishments"],
        read_json(&api.join("accomplishments.json"))["data"]["headline"]
    );

    let index = read_json(&api.join("index.json"));
    assert_eq!(index["data"]["name"], "Dana Whitfield");
    assert_eq!(index["data"]["endpoints"].as_array().map(Vec::len), Some(9));
}

#[test]
fn e2e_build_roles() {
    let dir = setup_profile_project();
    profile_api(&dir).arg("build").assert().success();

    let experience = read_json(&dir.path().join("api/experience.json"));
    let roles = experience["data"]["roles"].as_array().expect("roles array");
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0]["title"], "VP of Platform Engineering");
    assert_eq!(roles[1]["title"], "Director of Infrastructure");
    let raw = fs::read_to_string(dir.path().join("api/experience.json")).unwrap();
    assert!(!raw.contains("Most Recent"));
}

#[test]
fn e2e_build_explicit_paths() {
    let dir = setup_profile_project();
    fs::rename(dir.path().join("profile.md"), dir.path().join("me.md")).unwrap();

    profile_api(&dir)
        .args(["build", "--input", "me.md", "--output", "public/v1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("public/v1"));

    assert!(dir.path().join("public/v1/identity.json").exists());
    assert!(!dir.path().join("api").exists());
}

#[test]
fn e2e_build_missing_input_fails() {
    let dir = tempfile::tempdir().expect("create tempdir");
    profile_api(&dir)
        .arg("build")
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("profile document not found")
                .and(predicate::str::contains("profile-api template")),
        );

    assert!(!dir.path().join("api").exists());
}

#[test]
fn e2e_build_is_reproducible() {
    let dir = setup_profile_project();
    profile_api(&dir).args(["build", "--date", "2026-02-01"]).assert().success();
    let first = fs::read(dir.path().join("api/seeking.json")).unwrap();

    profile_api(&dir).args(["build", "--date", "2026-02-01"]).assert().success();
    assert_eq!(first, fs::read(dir.path().join("api/seeking.json")).unwrap());
}

#[test]
fn e2e_build_removes_emptied_sections() {
    let dir = setup_profile_project();
    profile_api(&dir).arg("build").assert().success();
    assert!(dir.path().join("api/skills.json").exists());

    let doc = fs::read_to_string(dir.path().join("profile.md")).unwrap();
    let cut = doc.find("## Skills").unwrap();
    fs::write(dir.path().join("profile.md"), &doc[..cut]).unwrap();

    profile_api(&dir)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files\":9"));
    assert!(!dir.path().join("api/skills.json").exists());
}

#[test]
fn e2e_build_invalid_date() {
    let dir = setup_profile_project();
    profile_api(&dir)
        .args(["build", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn e2e_build_minified_setting() {
    let dir = setup_profile_project();
    fs::write(
        dir.path().join("profile-api.toml"),
        "[output]\nformat = \"minified\"\nversion = \"2.0\"\n",
    )
    .unwrap();

    profile_api(&dir).arg("build").assert().success();
    let raw = fs::read_to_string(dir.path().join("api/identity.json")).unwrap();
    assert_eq!(raw.trim_end().lines().count(), 1);
    assert!(raw.contains("\"version\":\"2.0\""));
}

// ─── check ──────────────────────────────────────────────────────────────────

#[test]
fn e2e_check() {
    let dir = setup_profile_project();
    profile_api(&dir).arg("check").assert().success().stdout(
        predicate::str::contains("\"filled\":9")
            .and(predicate::str::contains("\"current_chapter\"")),
    );
    assert!(!dir.path().join("api").exists());
}

// ─── show ───────────────────────────────────────────────────────────────────

#[test]
fn e2e_show_record() {
    let dir = setup_profile_project();
    profile_api(&dir)
        .args(["show", "identity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana Whitfield"));
}

#[test]
fn e2e_show_unknown_endpoint() {
    let dir = setup_profile_project();
    profile_api(&dir)
        .args(["show", "hobbies"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown endpoint"));
}

// ─── template ───────────────────────────────────────────────────────────────

#[test]
fn e2e_template_then_build() {
    let dir = tempfile::tempdir().expect("create tempdir");
    profile_api(&dir)
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sections\":9"));
    assert!(dir.path().join("profile.md").exists());

    // A blank template publishes only the directory
    profile_api(&dir)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files\":1"));
    let index = read_json(&dir.path().join("api/index.json"));
    assert_eq!(index["data"]["name"], "Profile");

    profile_api(&dir)
        .arg("template")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
