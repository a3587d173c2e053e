//! Integration tests for the beofficial CLI
//!
//! These tests exercise the built binary end to end:
//! - roster listing and lookup
//! - digest composition
//! - export file contents
//! - fail-fast SMTP configuration handling

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const SMTP_VARS: [&str; 5] = ["SMTP_HOST", "SMTP_PORT", "SMTP_USER", "SMTP_PASS", "SMTP_FROM"];

/// Helper to get the beofficial binary path
fn beofficial_binary() -> PathBuf {
    // When running tests, the binary is in target/debug/beofficial
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("beofficial");
    path
}

/// Helper to run beofficial with a clean config dir and no SMTP environment
fn run_beofficial(dir: &Path, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(beofficial_binary());
    cmd.env("BEOFFICIAL_DIR", dir).env_remove("BEOFFICIAL_CONFIG").env_remove("RUST_LOG");
    for var in SMTP_VARS {
        cmd.env_remove(var);
    }
    cmd.args(args).output().expect("Failed to execute beofficial")
}

fn run_beofficial_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_beofficial(dir, args);
    assert!(
        output.status.success(),
        "command {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_agent_list_returns_five_seeds_in_order() {
    let dir = TempDir::new().unwrap();
    let stdout = run_beofficial_stdout(dir.path(), &["agent", "list", "-o", "json"]);

    let summaries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let codenames: Vec<&str> = summaries
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["codename"].as_str().unwrap())
        .collect();

    assert_eq!(codenames, ["SCRIBE", "SPARK", "EARLYBIRD", "MAGNET", "RALLY"]);
}

#[test]
fn test_agent_show_scribe_has_mission() {
    let dir = TempDir::new().unwrap();
    let stdout = run_beofficial_stdout(dir.path(), &["agent", "show", "SCRIBE", "-o", "json"]);

    let agent: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(agent["codename"], "SCRIBE");
    assert!(!agent["mission"].as_str().unwrap().is_empty());
}

#[test]
fn test_agent_show_unknown_codename_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_beofficial(dir.path(), &["agent", "show", "NOPE"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NOPE"), "stderr was: {stderr}");
}

#[test]
fn test_agent_set_unknown_field_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_beofficial(dir.path(), &["agent", "set", "SCRIBE", "budget", "100"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("budget"), "stderr was: {stderr}");
}

#[test]
fn test_digest_preview_drops_blank_bullets() {
    let dir = TempDir::new().unwrap();
    let stdout = run_beofficial_stdout(
        dir.path(),
        &[
            "digest", "preview", "--subject", "S", "--intro", "I", "--bullet", "", "--bullet",
            "  ", "--bullet", "x", "--footer", "F",
        ],
    );

    let bullet_lines: Vec<&str> = stdout.lines().filter(|l| l.starts_with("• ")).collect();
    assert_eq!(bullet_lines, vec!["• x"]);
    assert!(stdout.starts_with("Subject: S\n"));
}

#[test]
fn test_digest_preview_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let args = ["digest", "preview", "--subject", "S", "--intro", "I", "--footer", "F"];
    let first = run_beofficial_stdout(dir.path(), &args);
    let second = run_beofficial_stdout(dir.path(), &args);
    assert_eq!(first, second);
}

#[test]
fn test_export_writes_decodable_document() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let out_path = out.path().to_str().unwrap();

    run_beofficial_stdout(dir.path(), &["export", "--output", out_path]);

    let json_path = out.path().join("beofficial_agents.json");
    let readme_path = out.path().join("README_beofficial.txt");
    assert!(json_path.exists());
    assert!(readme_path.exists());

    let text = fs::read_to_string(&json_path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["project"], "BeOfficial");
    assert_eq!(doc["agents"].as_array().unwrap().len(), 5);
    assert!(!doc["exportedAt"].as_str().unwrap().is_empty());

    // stable, declaration-order keys in the raw text
    let exported_at = text.find("\"exportedAt\"").unwrap();
    let project = text.find("\"project\"").unwrap();
    let agents = text.find("\"agents\"").unwrap();
    assert!(exported_at < project && project < agents);

    let name = text.find("\"name\"").unwrap();
    let codename = text.find("\"codename\"").unwrap();
    let mission = text.find("\"mission\"").unwrap();
    assert!(name < codename && codename < mission);
}

#[test]
fn test_send_without_config_names_all_five_vars() {
    let dir = TempDir::new().unwrap();
    let output = run_beofficial(dir.path(), &["digest", "send", "--to", "ref@example.com"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASS, SMTP_FROM"),
        "stderr was: {stderr}"
    );
}

#[test]
fn test_send_with_partial_config_names_missing_vars() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::new(beofficial_binary());
    cmd.env("BEOFFICIAL_DIR", dir.path()).env_remove("BEOFFICIAL_CONFIG").env_remove("RUST_LOG");
    for var in SMTP_VARS {
        cmd.env_remove(var);
    }
    cmd.env("SMTP_HOST", "smtp.example.com").env("SMTP_PORT", "587");

    let output = cmd
        .args(["digest", "send", "--to", "ref@example.com"])
        .output()
        .expect("Failed to execute beofficial");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SMTP_USER, SMTP_PASS, SMTP_FROM"),
        "stderr was: {stderr}"
    );
    assert!(!stderr.contains("SMTP_HOST,"), "stderr was: {stderr}");
}

#[test]
fn test_status_json_covers_roster() {
    let dir = TempDir::new().unwrap();
    let stdout = run_beofficial_stdout(dir.path(), &["status", "-o", "json"]);

    let dashboard: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(dashboard["project"], "BeOfficial");
    assert_eq!(dashboard["agents"].as_array().unwrap().len(), 5);
    assert_eq!(dashboard["agents"][2]["codename"], "EARLYBIRD");
    assert_eq!(dashboard["agents"][2]["state"], "Ready");
}

#[test]
fn test_doctor_reports_smtp_vars() {
    let dir = TempDir::new().unwrap();
    let stdout = run_beofficial_stdout(dir.path(), &["doctor"]);

    for var in SMTP_VARS {
        assert!(stdout.contains(var), "doctor output missing {var}: {stdout}");
    }
}

#[test]
fn test_config_show_yaml_parses() {
    let dir = TempDir::new().unwrap();
    let stdout = run_beofficial_stdout(dir.path(), &["config", "show", "-o", "yaml"]);
    assert!(stdout.contains("project: BeOfficial"));
}

#[test]
fn test_config_file_overrides_digest_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("beofficial.yaml"),
        "digest:\n  subject: Custom Subject\n",
    )
    .unwrap();

    let stdout = run_beofficial_stdout(dir.path(), &["digest", "preview"]);
    assert!(stdout.starts_with("Subject: Custom Subject\n"), "stdout was: {stdout}");
}
