//! CLI integration tests for folio
//!
//! Runs the folio binary end-to-end using assert_cmd. Every test points
//! the config directory at a fresh temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a command with an isolated config dir and no latency
#[allow(deprecated)]
fn folio_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("FOLIO_CONFIG_DIR", config_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd.arg("--no-latency");
    cmd
}

#[test]
fn test_profile_shows_contact_and_sections() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alex Johnson"))
        .stdout(predicate::str::contains("alex.johnson@email.com"))
        .stdout(predicate::str::contains("Education"))
        .stdout(predicate::str::contains("Work Experience"));
}

#[test]
fn test_projects_unfiltered_lists_everything() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: [all]"))
        .stdout(predicate::str::contains("E-Commerce Platform"))
        .stdout(predicate::str::contains("Real-time Chat Application"));
}

#[test]
fn test_projects_filtered_by_skill() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["projects", "--skill", "GraphQL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[GraphQL]"))
        .stdout(predicate::str::contains("GraphQL Social Network"))
        .stdout(predicate::str::contains("E-Commerce Platform").not());
}

#[test]
fn test_projects_unknown_skill_is_empty_not_error() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["projects", "--skill", "Go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects use Go"));
}

#[test]
fn test_skills_dashboard() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .arg("skills")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Skills"))
        .stdout(predicate::str::contains("Used in 4 projects"))
        .stdout(predicate::str::contains("Used in 1 project\n"));
}

#[test]
fn test_search_highlights_match() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["search", "alex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile | [Alex] Johnson"));
}

#[test]
fn test_search_no_results() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["search", "nonexistent-zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for your search"));
}

#[test]
fn test_search_blank_query_prompts() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["search", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a search term to get started"));
}

#[test]
fn test_search_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = folio_cmd(&temp_dir)
        .args(["--format", "json", "search", "docker"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["type"], "skill");
    assert_eq!(results[0]["content"], "Used in 3 projects");
    assert_eq!(results[1]["type"], "project");
}

#[test]
fn test_skills_json_output_is_ranked() {
    let temp_dir = TempDir::new().unwrap();

    let output = folio_cmd(&temp_dir)
        .args(["skills", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let skills: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(skills[0]["name"], "React");
    assert_eq!(skills[0]["count"], 4);
}

#[test]
fn test_health_reports_online() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("Api: Online"))
        .stdout(predicate::str::contains("Uptime: 0h 0m"));
}

#[test]
fn test_health_quiet() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["health", "--quiet"])
        .assert()
        .success()
        .stdout("Online\n");
}

#[test]
fn test_config_set_then_get() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["config", "set", "display.highlight_open", "<<"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set display.highlight_open = <<"));

    folio_cmd(&temp_dir)
        .args(["config", "get", "display.highlight_open"])
        .assert()
        .success()
        .stdout("<<\n");

    assert!(temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_changes_search_markers() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["config", "set", "display.highlight_open", "*"])
        .assert()
        .success();
    folio_cmd(&temp_dir)
        .args(["config", "set", "display.highlight_close", "*"])
        .assert()
        .success();

    folio_cmd(&temp_dir)
        .args(["search", "alex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*Alex* Johnson"));
}

#[test]
fn test_config_list_and_reset() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["config", "set", "health.interval_secs", "5"])
        .assert()
        .success();

    folio_cmd(&temp_dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("health.interval_secs = 5"))
        .stdout(predicate::str::contains("latency.search_ms = 200"));

    folio_cmd(&temp_dir)
        .args(["config", "reset"])
        .assert()
        .success();

    folio_cmd(&temp_dir)
        .args(["config", "get", "health.interval_secs"])
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn test_config_path_uses_override() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["config", "get", "no.such.key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key: no.such.key"))
        .stderr(predicate::str::contains("Hint: try `folio config list`"));
}

#[test]
fn test_config_rejects_zero_interval() {
    let temp_dir = TempDir::new().unwrap();

    folio_cmd(&temp_dir)
        .args(["config", "set", "health.interval_secs", "0"])
        .assert()
        .failure();
}
