mod helpers;

use helpers::{EnvGuard, run_cli};
use serde_json::Value;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn cfg_json() -> Value {
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints JSON")
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let _env = EnvGuard::apply(&[]);
    let json = cfg_json();
    assert_eq!(json["starting_money"]["value"], 500);
    assert_eq!(json["starting_money"]["source"], "default");
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"], "default");
    assert_eq!(json["rounds"]["value"], 1);
    assert_eq!(json["rounds"]["source"], "default");
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let file = config_file("starting_money = 750\nseed = 456\n");
    let path = file.path().to_string_lossy().into_owned();
    let _env = EnvGuard::apply(&[("SHOWDOWN_CONFIG", path.as_str())]);

    let json = cfg_json();
    assert_eq!(json["starting_money"]["value"], 750);
    assert_eq!(json["starting_money"]["source"], "file");
    assert_eq!(json["seed"]["value"], 456);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["rounds"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    let file = config_file("seed = 456\nrounds = 3\n");
    let path = file.path().to_string_lossy().into_owned();
    let _env = EnvGuard::apply(&[
        ("SHOWDOWN_CONFIG", path.as_str()),
        ("SHOWDOWN_SEED", "123"),
        ("SHOWDOWN_MONEY", "900"),
    ]);

    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 123);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["starting_money"]["value"], 900);
    assert_eq!(json["starting_money"]["source"], "env");
    assert_eq!(json["rounds"]["value"], 3);
    assert_eq!(json["rounds"]["source"], "file");
}

#[test]
#[serial]
fn flags_override_env_for_play() {
    let _env = EnvGuard::apply(&[
        ("SHOWDOWN_SEED", "123"),
        ("SHOWDOWN_MONEY", "900"),
        ("SHOWDOWN_ROUNDS", "4"),
    ]);

    let res = run_cli(&["play", "--seed", "77", "--rounds", "2"], "q\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(
        res.stdout.contains("play: rounds=2 seed=77 money=900"),
        "{}",
        res.stdout
    );
}

#[test]
#[serial]
fn env_seed_makes_play_reproducible() {
    let _env = EnvGuard::apply(&[("SHOWDOWN_SEED", "2024")]);
    let a = run_cli(&["play"], "pass\nbet\n");
    let b = run_cli(&["play"], "pass\nbet\n");
    assert!(a.stdout.contains("seed=2024"));
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn invalid_env_value_is_a_config_error() {
    let _env = EnvGuard::apply(&[("SHOWDOWN_SEED", "not-a-number")]);
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"), "{}", res.stderr);
    assert!(res.stderr.contains("Invalid seed"), "{}", res.stderr);
    assert!(res.stdout.is_empty());
}

#[test]
#[serial]
fn invalid_file_values_are_rejected() {
    let file = config_file("rounds = 0\n");
    let path = file.path().to_string_lossy().into_owned();
    let _env = EnvGuard::apply(&[("SHOWDOWN_CONFIG", path.as_str())]);
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("rounds must be >=1"), "{}", res.stderr);

    let file = config_file("starting_money = \"lots\"\n");
    let path = file.path().to_string_lossy().into_owned();
    let _env2 = EnvGuard::apply(&[("SHOWDOWN_CONFIG", path.as_str())]);
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"), "{}", res.stderr);
}

#[test]
#[serial]
fn missing_config_file_is_reported() {
    let _env = EnvGuard::apply(&[("SHOWDOWN_CONFIG", "/nonexistent/showdown.toml")]);
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"), "{}", res.stderr);
}

#[test]
#[serial]
fn starting_money_near_i64_max_is_rejected() {
    let _env = EnvGuard::apply(&[]);
    let res = run_cli(&["play", "--money", "9223372036854775807"], "bet\n");
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("starting_money must be <= 4611686018427387903"),
        "{}",
        res.stderr
    );
    assert!(!res.stdout.contains("Session complete."));

    let _env = EnvGuard::apply(&[("SHOWDOWN_MONEY", "9223372036854775807")]);
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("starting_money must be <="), "{}", res.stderr);
}

#[test]
#[serial]
fn deal_uses_the_configured_seed() {
    let _env = EnvGuard::apply(&[("SHOWDOWN_SEED", "5")]);
    let deal = run_cli(&["deal"], "");
    assert_eq!(deal.exit_code, 0, "stderr: {}", deal.stderr);
    assert!(deal.stdout.starts_with("Seed: 5\n"), "{}", deal.stdout);

    let play = run_cli(&["play"], "bet\n");
    assert!(play.stdout.contains("seed=5"));
    let player = |text: &str| {
        text.lines()
            .find(|l| l.starts_with("Player: "))
            .map(str::to_owned)
    };
    assert_eq!(player(&deal.stdout), player(&play.stdout));

    // An explicit flag still wins
    let flagged = run_cli(&["deal", "--seed", "6"], "");
    assert!(flagged.stdout.starts_with("Seed: 6\n"));
}
