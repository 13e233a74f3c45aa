//! End-to-end tests for the `stacona` binary.
//!
//! Every test runs in its own temp directory with the store, config and home
//! directories pointed inside it, and cheap Argon2 parameters.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const SECRET: &str = "integration-test-secret";
const STRONG_PASSWORD: &str = "Tr0ub4dor&3xyz";

fn stacona(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("stacona");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("XDG_DATA_HOME", dir.path().join("data"))
        .env("STACONA_STORE__PATH", dir.path().join("users.json"))
        .env("STACONA_HASHER__MEMORY_COST_KIB", "64")
        .env("STACONA_HASHER__ITERATIONS", "1")
        .env_remove("STACONA_AUTH__JWT_SECRET")
        .env_remove("STACONA_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

fn with_secret(dir: &TempDir) -> Command {
    let mut cmd = stacona(dir);
    cmd.env("STACONA_AUTH__JWT_SECRET", SECRET);
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn register(dir: &TempDir, username: &str, email: &str) -> assert_cmd::assert::Assert {
    stacona(dir)
        .args(["--output-format", "json", "register"])
        .args(["-u", username, "-e", email, "-p", STRONG_PASSWORD])
        .assert()
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    stacona(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    stacona(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    stacona(&dir).arg("frobnicate").assert().code(2);
}

// ── register ──────────────────────────────────────────────────────────────────

#[test]
fn register_prints_success_without_digest() {
    let dir = TempDir::new().unwrap();
    let output = register(&dir, "alice", "alice@example.com")
        .success()
        .get_output()
        .clone();

    let json = json_stdout(&output);
    assert_eq!(json["__typename"], "Success");
    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], "alice@example.com");
    assert!(json.get("password").is_none());

    let stored = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
    assert!(stored.contains("$argon2id$"));
    assert!(!stored.contains(STRONG_PASSWORD));
}

#[test]
fn duplicate_registration_reports_both_collisions() {
    let dir = TempDir::new().unwrap();
    register(&dir, "alice", "alice@example.com").success();

    let output = register(&dir, "alice", "alice@example.com")
        .code(2)
        .get_output()
        .clone();

    let json = json_stdout(&output);
    assert_eq!(json["__typename"], "Failure");
    assert_eq!(
        json["usernameErrors"],
        serde_json::json!(["this user already exists"])
    );
    assert_eq!(
        json["emailErrors"],
        serde_json::json!(["this email already exists"])
    );
}

#[test]
fn invalid_candidate_is_rejected_and_not_stored() {
    let dir = TempDir::new().unwrap();
    let output = stacona(&dir)
        .args(["--output-format", "json", "register"])
        .args(["-u", "bob!", "-e", "not-an-email", "-p", "short"])
        .assert()
        .code(2)
        .get_output()
        .clone();

    let json = json_stdout(&output);
    assert_eq!(json["__typename"], "Failure");
    assert!(json["usernameErrors"].is_array());
    assert!(json["emailErrors"].is_array());
    assert!(
        json["passwordErrors"]
            .as_array()
            .unwrap()
            .contains(&Value::from(
                "password must be longer than or equal to 10 characters"
            ))
    );
    assert!(!dir.path().join("users.json").exists());
}

#[test]
fn human_output_lists_field_errors() {
    let dir = TempDir::new().unwrap();
    stacona(&dir)
        .args(["--no-color", "--output-format", "plain", "register"])
        .args(["-u", "carol", "-e", "carol", "-p", STRONG_PASSWORD])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("email: email must be an email"))
        .stderr(predicate::str::contains("Registration rejected"));
}

// ── login / whoami / refresh ──────────────────────────────────────────────────

#[test]
fn login_without_secret_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    register(&dir, "alice", "alice@example.com").success();

    stacona(&dir)
        .args(["login", "-u", "alice", "-p", STRONG_PASSWORD])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("jwt_secret"));
}

#[test]
fn login_whoami_and_refresh() {
    let dir = TempDir::new().unwrap();
    register(&dir, "alice", "alice@example.com").success();

    let output = with_secret(&dir)
        .args(["--output-format", "json", "login"])
        .args(["-u", "alice", "-p", STRONG_PASSWORD])
        .assert()
        .success()
        .get_output()
        .clone();
    let json = json_stdout(&output);
    assert_eq!(json["__typename"], "LoginResult");
    assert_eq!(json["user"]["username"], "alice");
    let token = json["token"].as_str().unwrap().to_owned();

    with_secret(&dir)
        .args(["--output-format", "json", "whoami", "--token", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice@example.com"));

    let output = with_secret(&dir)
        .args(["--output-format", "json", "refresh"])
        .env("STACONA_TOKEN", &token)
        .assert()
        .success()
        .get_output()
        .clone();
    assert_eq!(json_stdout(&output)["__typename"], "RefreshToken");
}

#[test]
fn wrong_password_is_rejected() {
    let dir = TempDir::new().unwrap();
    register(&dir, "alice", "alice@example.com").success();

    with_secret(&dir)
        .args(["login", "-u", "alice", "-p", "not-the-password"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Could not login with the provided credentials",
        ));
}

#[test]
fn forged_token_is_rejected() {
    let dir = TempDir::new().unwrap();
    with_secret(&dir)
        .args(["whoami", "--token", "not.a.token"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Could not log in with the provided credentials",
        ));
}

// ── seed ──────────────────────────────────────────────────────────────────────

#[test]
fn seed_is_idempotent_and_admin_can_log_in() {
    let dir = TempDir::new().unwrap();

    stacona(&dir)
        .args(["--no-color", "seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 'admin'"));
    stacona(&dir)
        .args(["--no-color", "seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    with_secret(&dir)
        .args(["login", "-u", "admin", "-p", "admin"])
        .assert()
        .success();
}

// ── config / init / completions ───────────────────────────────────────────────

#[test]
fn config_get_reads_environment_override() {
    let dir = TempDir::new().unwrap();
    stacona(&dir)
        .args(["config", "get", "hasher.iterations"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn config_get_unknown_key_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    stacona(&dir)
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn missing_explicit_config_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    stacona(&dir)
        .args(["-c", "absent.toml", "seed"])
        .assert()
        .code(4);
}

#[test]
fn init_writes_a_config_with_a_secret() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stacona.toml");

    stacona(&dir)
        .args(["-c", path.to_str().unwrap(), "init"])
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("jwt_secret"));

    // The generated secret makes login usable without any env override.
    register(&dir, "alice", "alice@example.com").success();
    stacona(&dir)
        .args(["-c", path.to_str().unwrap(), "login"])
        .args(["-u", "alice", "-p", STRONG_PASSWORD])
        .assert()
        .success();
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    stacona(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stacona"));
}
