//! End-to-end tests for the gitq binary.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running gitq, isolated from any user config.
fn gitq(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gitq").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("GITQ_CONFIG")
        .env_remove("GITQ_LOG");
    cmd
}

fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(output.status.success(), "git {:?} failed", args);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

/// A repository with `count` commits; returns ids newest first.
fn repo_with_commits(count: usize) -> (TempDir, Vec<String>) {
    let dir = TempDir::new().unwrap();
    run_git(dir.path(), &["init", "-b", "main"]);
    run_git(dir.path(), &["config", "user.email", "test@example.com"]);
    run_git(dir.path(), &["config", "user.name", "Test User"]);
    for n in 0..count {
        std::fs::write(dir.path().join("file.txt"), format!("{}\n", n)).unwrap();
        run_git(dir.path(), &["add", "file.txt"]);
        run_git(dir.path(), &["commit", "-m", &format!("C{}", n)]);
    }
    let log = run_git(dir.path(), &["log", "--pretty=format:%H"]);
    let ids = log.lines().map(str::to_string).collect();
    (dir, ids)
}

#[test]
fn bare_invocation_prints_help() {
    let dir = TempDir::new().unwrap();
    gitq(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
    let dir = TempDir::new().unwrap();
    gitq(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitq"));
}

#[test]
fn help_mentions_undo_and_redo() {
    let dir = TempDir::new().unwrap();
    gitq(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("undo").and(predicate::str::contains("redo")));
}

#[test]
fn outside_a_repository_fails() {
    let dir = TempDir::new().unwrap();
    gitq(dir.path())
        .arg("status")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to open repository"));
}

#[test]
fn checkout_prints_target_and_queues() {
    let (dir, ids) = repo_with_commits(6);
    gitq(dir.path())
        .args(["checkout", ids[3].as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Checked out to {}", ids[3])))
        .stdout(predicate::str::contains(format!(
            "Forward queue: [{}, {}]",
            ids[5], ids[4]
        )))
        .stdout(predicate::str::contains("Backward queue: []"));
}

#[test]
fn checkout_unknown_commit_exits_nonzero() {
    let (dir, _) = repo_with_commits(3);
    gitq(dir.path())
        .args(["checkout", "deadbeef"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found in history"));
}

#[test]
fn checkout_malformed_commit_reports_not_found() {
    let (dir, _) = repo_with_commits(3);
    for target in ["-abc", " abc"] {
        gitq(dir.path())
            .args(["checkout", target])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("not found in history"));
    }
}

#[test]
fn undo_with_empty_queue_reports_and_succeeds() {
    let (dir, _) = repo_with_commits(2);
    gitq(dir.path())
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous commits to undo."));
}

#[test]
fn redo_with_empty_queue_reports_even_when_quiet() {
    let (dir, _) = repo_with_commits(2);
    gitq(dir.path())
        .args(["redo", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No forward commits to redo."));
}

#[test]
fn redo_then_reset() {
    let (dir, ids) = repo_with_commits(6);
    gitq(dir.path())
        .args(["-q", "checkout", ids[3].as_str()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    gitq(dir.path())
        .arg("redo")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Redone to {}", ids[4])));

    gitq(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Git queues reset."));

    gitq(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Forward queue: []"))
        .stdout(predicate::str::contains("Backward queue: []"));
}

#[test]
fn cwd_flag_selects_repository() {
    let (repo, _) = repo_with_commits(2);
    let elsewhere = TempDir::new().unwrap();
    gitq(elsewhere.path())
        .args(["--cwd", repo.path().to_str().unwrap(), "undo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous commits to undo."));
}

#[test]
fn completion_generates_script() {
    let dir = TempDir::new().unwrap();
    gitq(dir.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitq"));
}

#[test]
fn status_shows_state_dir_and_loaded_config() {
    let (dir, _) = repo_with_commits(2);
    let gitq_dir = dir.path().join(".git").join("gitq");
    std::fs::create_dir_all(&gitq_dir).unwrap();
    std::fs::write(gitq_dir.join("config.toml"), "show_queues = false\n").unwrap();

    gitq(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("HEAD: main"))
        .stdout(predicate::str::contains("State directory:"))
        .stdout(predicate::str::contains("Repo config:"))
        .stdout(predicate::str::contains("Global config:").not());
}
