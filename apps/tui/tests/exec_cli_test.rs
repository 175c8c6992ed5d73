//! End-to-end runs of the `termfolio` binary in --exec mode.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// The binary with a config path inside `dir`, so the home directory is never touched.
fn termfolio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("termfolio").unwrap();
    cmd.arg("--config").arg(dir.path().join("config.toml")).arg("--plain");
    cmd.env_remove("TERMFOLIO_LOG");
    cmd
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("termfolio").unwrap();
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("termfolio"));
}

#[test]
fn test_exec_whoami() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .args(["--lang", "en", "--exec", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fabián Muñoz V."))
        .stdout(predicate::str::contains("\u{1b}[").not());
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_exec_spanish_help() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .args(["--lang", "es", "-e", "help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMANDOS DISPONIBLES"));
}

#[test]
fn test_exec_runs_lines_in_order() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .args(["--lang", "en", "-e", "incident", "-e", "investigate", "-e", "resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TRIGGERING INCIDENT SIMULATION"))
        .stdout(predicate::str::contains("Investigating incident..."))
        .stdout(predicate::str::contains("Total incidents resolved: 1"));
}

#[test]
fn test_exec_errors_still_exit_zero() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .args(["--lang", "en", "-e", "kubectl get bogus", "-e", "frobnicate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kubectl: unknown argument \"bogus\""))
        .stdout(predicate::str::contains("Command not found: frobnicate"));
}

#[test]
fn test_config_file_sets_prompt_owner() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[shell]\nprompt_user = \"fabian\"\nlocale = \"en\"\n",
    )
    .unwrap();
    termfolio(&dir)
        .args(["-e", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fabian  README.md"));
}

#[test]
fn test_custom_profile() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("profile.toml");
    fs::write(
        &profile,
        r#"
[profile]
name = "Ada Lovelace"
role = "SRE"
company = "Acme"
location = "London"
email = "ada@example.com"
linkedin = "https://linkedin.com/in/ada"
github = "https://github.com/ada"
career_start = "2020-01-15"
bio = { en = "Engines and pagers.", es = "Motores y pagers." }
"#,
    )
    .unwrap();

    termfolio(&dir)
        .arg("--profile")
        .arg(&profile)
        .args(["--lang", "en", "-e", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("Engines and pagers."));
}

#[test]
fn test_missing_profile_fails() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .arg("--profile")
        .arg(dir.path().join("nope.toml"))
        .args(["-e", "whoami"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load profile"));
}

#[test]
fn test_broken_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[shell\n").unwrap();
    termfolio(&dir)
        .args(["-e", "help"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_history_capacity_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[shell]\nhistory_capacity = 0\n").unwrap();
    termfolio(&dir).args(["-e", "help"]).assert().failure();
}

#[test]
fn test_unknown_language_flag() {
    let dir = TempDir::new().unwrap();
    termfolio(&dir)
        .args(["--lang", "fr", "-e", "help"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language"));
}
