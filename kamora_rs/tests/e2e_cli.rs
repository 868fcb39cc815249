//! End-to-end tests for the `kamora` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn content_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content/site.toml")
}

/// `kamora` running inside an empty temp dir, so no stray `kamora.toml` is picked up.
fn kamora(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("kamora");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("kamora.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().unwrap();
        kamora(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("export"))
            .stdout(predicate::str::contains("contact"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().unwrap();
        kamora(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn unknown_subcommand_fails() {
        let dir = TempDir::new().unwrap();
        kamora(&dir).arg("deploy").assert().failure();
    }
}

// ============================================
// check / export
// ============================================

mod content {
    use super::*;

    #[test]
    fn check_builtin_content() {
        let dir = TempDir::new().unwrap();
        kamora(&dir)
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("5 testimonials"))
            .stdout(predicate::str::contains("6 features"))
            .stdout(predicate::str::contains("3 plans"))
            .stdout(predicate::str::contains("auto-advance 5000ms"))
            .stdout(predicate::str::ends_with("ok\n"));
    }

    #[test]
    fn check_explicit_content_file() {
        let dir = TempDir::new().unwrap();
        kamora(&dir)
            .arg("check")
            .arg("--content")
            .arg(content_path())
            .assert()
            .success()
            .stdout(predicate::str::contains("6 services"));
    }

    #[test]
    fn check_reports_duplicate_testimonial_ids() {
        let dir = TempDir::new().unwrap();
        let original = std::fs::read_to_string(content_path()).unwrap();
        let broken = original.replacen("id = 2", "id = 1", 1);
        let path = dir.path().join("site.toml");
        std::fs::write(&path, broken).unwrap();

        kamora(&dir)
            .arg("check")
            .arg("--content")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("site.toml"));
    }

    #[test]
    fn check_honours_config_file() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[carousel]\ninterval_ms = 7000\n[contact]\nsubmit_timeout_ms = 0\n");
        kamora(&dir)
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("auto-advance 7000ms"))
            .stdout(predicate::str::contains("submit timeout off"));
    }

    #[test]
    fn check_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[carousel]\ninterval_ms = 0\n");
        kamora(&dir)
            .arg("check")
            .arg("--config")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("interval_ms"));
    }

    #[test]
    fn export_prints_json() {
        let dir = TempDir::new().unwrap();
        let output = kamora(&dir).arg("export").output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
        assert_eq!(json["brand"]["name"], "Kamora");
        assert_eq!(json["testimonials"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["pricing"]["plans"][1]["highlighted"], true);
    }

    #[test]
    fn export_pretty_is_multiline() {
        let dir = TempDir::new().unwrap();
        kamora(&dir)
            .args(["export", "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\n  \"brand\""));
    }
}

// ============================================
// contact
// ============================================

mod contact {
    use super::*;

    #[test]
    fn valid_fields_pass() {
        let dir = TempDir::new().unwrap();
        kamora(&dir)
            .args([
                "contact",
                "--name",
                "John Doe",
                "--email",
                "john@example.com",
                "--message",
                "This is a long enough message",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"valid\":true"));
    }

    #[test]
    fn invalid_fields_report_messages() {
        let dir = TempDir::new().unwrap();
        kamora(&dir)
            .args([
                "contact",
                "--name",
                "A",
                "--email",
                "not-an-email",
                "--phone",
                "call me",
            ])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Name must be at least 2 characters"))
            .stdout(predicate::str::contains("Please enter a valid email address"))
            .stdout(predicate::str::contains("Message is required"))
            .stdout(predicate::str::contains("Please enter a valid phone number"));
    }

    #[test]
    fn send_uses_configured_delay() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[contact]\nsubmit_delay_ms = 20\n");
        kamora(&dir)
            .args([
                "contact",
                "--name",
                "John Doe",
                "--email",
                "john@example.com",
                "--message",
                "This is a long enough message",
                "--send",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"sent\":true"));
    }

    #[test]
    fn send_times_out() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            "[contact]\nsubmit_delay_ms = 2000\nsubmit_timeout_ms = 20\n",
        );
        kamora(&dir)
            .args([
                "contact",
                "--name",
                "John Doe",
                "--email",
                "john@example.com",
                "--message",
                "This is a long enough message",
                "--send",
                "--log-level",
                "warn",
            ])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("no response after 20ms"))
            .stderr(predicate::str::contains("submission failed"));
    }

    #[test]
    fn send_with_invalid_fields_does_not_send() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[contact]\nsubmit_delay_ms = 20\n");
        kamora(&dir)
            .args(["contact", "--name", "John Doe", "--send"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("\"sent\":false"))
            .stdout(predicate::str::contains("Email is required"));
    }
}
