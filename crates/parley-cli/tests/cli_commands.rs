//! Integration tests for the `parley` CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a small, well-formed dialogue.
fn test_content() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("crossroads.json"),
        r#"{
    "speakers": { "Old Man": "gray" },
    "trees": [
        {
            "id": "crossroads",
            "name": "At the Crossroads",
            "root": "beg",
            "nodes": [
                {
                    "id": "beg",
                    "speaker": "Old Man",
                    "text": ["Spare a coin, {PlayerName}?"],
                    "choices": [
                        {
                            "text": "Give him bread",
                            "next": "farewell",
                            "effects": [{ "kind": "add_chivalry", "amount": 5 }]
                        },
                        {
                            "text": "Demand his purse",
                            "next": "farewell",
                            "tone": "aggressive",
                            "condition": { "kind": "level_above", "value": 10 }
                        }
                    ]
                },
                { "id": "farewell", "text": ["Safe travels."], "is_end": true }
            ]
        }
    ]
}
"#,
    )
    .unwrap();
    dir
}

/// Add a second file with a broken link and a colliding node id.
fn broken_content() -> TempDir {
    let dir = test_content();
    fs::write(
        dir.path().join("haunt.json"),
        r#"{
    "trees": [
        {
            "id": "haunt",
            "name": "The Haunted Hall",
            "root": "hall",
            "nodes": [
                { "id": "hall", "text": ["A cold draft."], "next": "ghost" },
                { "id": "farewell", "is_end": true }
            ]
        }
    ]
}
"#,
    )
    .unwrap();
    dir
}

fn parley() -> Command {
    let mut cmd = Command::cargo_bin("parley").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_walks_to_the_end() {
    let dir = test_content();
    parley()
        .args(["play", "crossroads", "--no-pacing", "-d"])
        .arg(dir.path())
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[Old Man]")
                .and(predicate::str::contains("Spare a coin, Wanderer?"))
                .and(predicate::str::contains("[1] Give him bread"))
                .and(predicate::str::contains("[0] (Say nothing)"))
                .and(predicate::str::contains("(+5 Chivalry)"))
                .and(predicate::str::contains("Dialogue complete at 'farewell'")),
        );
}

#[test]
fn play_hides_gated_choices() {
    let dir = test_content();
    parley()
        .args(["play", "crossroads", "--no-pacing", "-d"])
        .arg(dir.path())
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demand his purse").not());
}

#[test]
fn play_with_profile_and_save() {
    let dir = test_content();
    let profile = dir.path().join("rowan.profile");
    let saved = dir.path().join("saved.profile");
    fs::write(&profile, r#"{"player": {"name": "Rowan", "level": 12}}"#).unwrap();

    parley()
        .args(["play", "crossroads", "--no-pacing", "-d"])
        .arg(dir.path())
        .arg("--profile")
        .arg(&profile)
        .arg("--save")
        .arg(&saved)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Spare a coin, Rowan?")
                .and(predicate::str::contains("[2] Demand his purse"))
                .and(predicate::str::contains("Profile saved")),
        );

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&saved).unwrap()).unwrap();
    assert_eq!(json["player"]["name"], "Rowan");
    assert_eq!(json["player"]["chivalry"], 0);
}

#[test]
fn play_say_nothing() {
    let dir = test_content();
    parley()
        .args(["play", "crossroads", "--no-pacing", "-d"])
        .arg(dir.path())
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("without a word"));
}

#[test]
fn play_reprompts_on_bad_input_and_stops_at_eof() {
    let dir = test_content();
    parley()
        .args(["play", "crossroads", "--no-pacing", "-d"])
        .arg(dir.path())
        .write_stdin("nine\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Please enter a valid choice.")
                .and(predicate::str::contains("without a word")),
        );
}

#[test]
fn play_unknown_tree_fails() {
    let dir = test_content();
    parley()
        .args(["play", "nowhere", "--no-pacing", "-d"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no dialogue tree named 'nowhere'"));
}

#[test]
fn play_missing_profile_fails() {
    let dir = test_content();
    parley()
        .args(["play", "crossroads", "--no-pacing", "--profile", "missing.json", "-d"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_trees() {
    let dir = broken_content();
    parley()
        .args(["list", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("crossroads")
                .and(predicate::str::contains("At the Crossroads"))
                .and(predicate::str::contains("haunt"))
                .and(predicate::str::contains("2 trees")),
        );
}

#[test]
fn list_empty_dir_fails() {
    let dir = TempDir::new().unwrap();
    parley()
        .args(["list", "-d"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .json content files"));
}

#[test]
fn list_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
    parley()
        .args(["list", "-d"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.json"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_clean_content() {
    let dir = test_content();
    parley()
        .args(["check", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_reports_dangling_links_and_collisions() {
    let dir = broken_content();
    parley()
        .args(["check", "-d"])
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("haunt/hall leads to missing node 'ghost'")
                .and(predicate::str::contains("node 'farewell' is defined by crossroads, haunt")),
        )
        .stderr(predicate::str::contains("1 error in dialogue content"));
}

#[test]
fn check_warns_about_effects_that_never_run() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("toll.json"),
        r#"{
    "trees": [
        {
            "id": "toll",
            "name": "The Toll Bridge",
            "root": "gate",
            "nodes": [
                {
                    "id": "gate",
                    "next": "road",
                    "effects": [{ "kind": "add_gold", "amount": -5 }]
                },
                { "id": "road", "is_end": true }
            ]
        }
    ]
}
"#,
    )
    .unwrap();
    parley()
        .args(["check", "-d"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("toll/gate has effects but is not an end node")
                .and(predicate::str::contains("All checks passed: 1 trees, 1 warning")),
        );
}
