//! End-to-end tests for the tagwatch CLI
//!
//! These tests verify:
//! - Dry-run prints the report on stdout
//! - Configuration errors are reported before any work is done
//! - Exit codes are correct for various scenarios
//!
//! Every manifest here uses a URL without a known provider host, so the
//! version comes from the URL itself and no network access is needed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ENV_VARS: [&str; 6] = [
    "WEBHOOK_URL",
    "MENTION",
    "GITHUB_TOKEN",
    "GITLAB_TOKEN",
    "CODEBERG_TOKEN",
    "REPO_URL",
];

/// Command with a clean environment, run from `dir` so no `.env` is picked up
fn tagwatch(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tagwatch").expect("binary should be built");
    cmd.current_dir(dir);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "off");
    cmd
}

/// Create a manifest tree with two groups
fn create_test_repo() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("repo");

    fs::create_dir_all(root.join("core")).unwrap();
    fs::create_dir_all(root.join("extra")).unwrap();

    fs::write(
        root.join("core/make.json"),
        r#"{
  "name": "make",
  "version": "4.4.0",
  "source": { "url": "https://ftp.gnu.org/gnu/make/make-4.4.1.tar.gz" }
}"#,
    )
    .unwrap();
    fs::write(
        root.join("extra/bash.json"),
        r#"{
  "name": "bash",
  "version": "5.2.21",
  "source": { "url": "https://ftp.gnu.org/gnu/bash/bash-5.2.21.tar.gz" }
}"#,
    )
    .unwrap();
    fs::write(
        root.join("extra/patch.json"),
        r#"{
  "name": "patch",
  "version": "2.8.0",
  "source": { "url": "https://ftp.gnu.org/gnu/patch/patch-2.7.6.tar.xz" }
}"#,
    )
    .unwrap();

    temp_dir
}

mod dry_run_tests {
    use super::*;

    #[test]
    fn test_dry_run_prints_report() {
        let temp_dir = create_test_repo();

        tagwatch(temp_dir.path())
            .args(["--dry-run", "--path", "repo", "--throttle-ms", "0", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("# Repository Checklist ["))
            .stdout(predicate::str::contains("- core/make 4.4.0 → 4.4.1"))
            .stdout(predicate::str::contains(
                "⚠️ PACKAGE RETROCEDED ! - extra/patch 2.8.0 → 2.7.6",
            ))
            .stdout(predicate::str::contains("extra/bash").not());
    }

    #[test]
    fn test_dry_run_with_mention() {
        let temp_dir = create_test_repo();

        tagwatch(temp_dir.path())
            .args(["-n", "--path", "repo", "--throttle-ms", "0", "-q"])
            .args(["--mention", "<@&42>"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<@&42>\n# Repository Checklist"));
    }

    #[test]
    fn test_dry_run_empty_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("repo")).unwrap();

        tagwatch(temp_dir.path())
            .args(["--dry-run", "--path", "repo", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No new versions found."));
    }

    #[test]
    fn test_dry_run_summary_on_stderr() {
        let temp_dir = create_test_repo();

        tagwatch(temp_dir.path())
            .args(["--dry-run", "--path", "repo", "--throttle-ms", "0"])
            .assert()
            .success()
            .stderr(predicate::str::contains("core/make"));
    }
}

mod config_error_tests {
    use super::*;

    #[test]
    fn test_missing_webhook_fails() {
        let temp_dir = create_test_repo();

        tagwatch(temp_dir.path())
            .args(["--path", "repo"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("WEBHOOK_URL"));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let temp_dir = create_test_repo();

        tagwatch(temp_dir.path())
            .args(["--dry-run", "--path", "repo", "--verbose", "-q"])
            .assert()
            .failure();
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let temp_dir = create_test_repo();

        tagwatch(temp_dir.path())
            .args(["--dry-run", "--path", "repo", "--max-chunk", "0"])
            .assert()
            .failure();
    }
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_exit_code_missing_path() {
        let temp_dir = tempfile::tempdir().unwrap();

        tagwatch(temp_dir.path())
            .args(["--dry-run", "--path", "does-not-exist"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_exit_code_unreachable_webhook() {
        let temp_dir = create_test_repo();

        // Nothing listens on port 9; every chunk fails but the run completes
        tagwatch(temp_dir.path())
            .args(["--path", "repo", "--throttle-ms", "0", "-q"])
            .args(["--webhook-url", "http://127.0.0.1:9/hook"])
            .assert()
            .code(2);
    }

    #[test]
    fn test_exit_code_help() {
        let temp_dir = tempfile::tempdir().unwrap();

        tagwatch(temp_dir.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--dry-run"));
    }

    #[test]
    fn test_exit_code_version() {
        let temp_dir = tempfile::tempdir().unwrap();

        tagwatch(temp_dir.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("tagwatch"));
    }
}
