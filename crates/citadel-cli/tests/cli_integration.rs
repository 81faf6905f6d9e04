//! CLI Integration Tests
//!
//! These tests verify the CLI wiring end-to-end without touching the network:
//! argument validation fails before any request is sent, and `query` only
//! prints the request body.

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("citadel").expect("Failed to find citadel binary")
}

// ============================================================================
// Query Command Tests
// ============================================================================

#[test]
fn test_query_prints_request_body() {
    cli_cmd()
        .args(["query", "--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operationName\": \"getCharacters\""))
        .stdout(predicate::str::contains("characters(page: $page)"))
        .stdout(predicate::str::contains("\"page\": 3"));
}

#[test]
fn test_query_defaults_to_first_page() {
    cli_cmd()
        .arg("query")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"page\": 1"));
}

// ============================================================================
// Argument Validation Tests
// ============================================================================

#[test]
fn test_list_rejects_unknown_language() {
    cli_cmd()
        .args(["list", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("language 'fr'"));
}

#[test]
fn test_list_rejects_unknown_status() {
    cli_cmd()
        .args(["list", "--status", "zombie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status 'zombie'"));
}

#[test]
fn test_list_rejects_unknown_sort() {
    cli_cmd()
        .args(["list", "--sort", "age"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sort key 'age'"));
}

#[test]
fn test_list_rejects_zero_pages() {
    cli_cmd()
        .args(["--endpoint", "http://127.0.0.1:9/graphql", "list", "--pages", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pages"))
        .stderr(predicate::str::contains("Error loading data").not());
}

#[test]
fn test_rejects_non_http_endpoint() {
    cli_cmd()
        .args(["--endpoint", "ftp://example.com", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("endpoint must be an http(s) URL"));
}

#[test]
fn test_unreachable_endpoint_reports_initial_error() {
    cli_cmd()
        .args(["--endpoint", "http://127.0.0.1:9/graphql", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading data"));
}

#[test]
fn test_unreachable_endpoint_german_message() {
    cli_cmd()
        .args(["--endpoint", "http://127.0.0.1:9/graphql", "list", "--lang", "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fehler beim Laden der Daten"));
}

// ============================================================================
// Help Tests
// ============================================================================

#[test]
fn test_help_lists_commands() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("page"))
        .stdout(predicate::str::contains("query"));
}
