#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! None of these tests reach a real model endpoint: they either fail before
//! the network call or point at a closed local port.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use word_guru::cache::cache_key;
use word_guru::config::CONFIG_FILENAME;
use word_guru::expert::PromptRenderer;

/// Nothing listens on the discard port.
const CLOSED_ENDPOINT: &str = "http://127.0.0.1:9";

#[allow(deprecated)]
fn word_guru() -> Command {
    let mut cmd = Command::cargo_bin("word-guru").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A project folder holding a configuration file with the given body.
fn project_with_config(body: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILENAME), body).unwrap();
    temp_dir
}

#[test]
fn test_help_displays_usage() {
    word_guru()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("your language expert"))
        .stdout(predicate::str::contains("get-definition"))
        .stdout(predicate::str::contains("translate"))
        .stdout(predicate::str::contains("correct-text"))
        .stdout(predicate::str::contains("--no-cache"));
}

#[test]
fn test_version_displays_version() {
    word_guru()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    word_guru()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("ISO 639-3"))
        .stdout(predicate::str::contains("eng"))
        .stdout(predicate::str::contains("French"))
        .stdout(predicate::str::contains("ita"));
}

#[test]
fn test_invalid_language_code() {
    word_guru()
        .args(["get-definition", "happiness", "xxx"])
        .assert()
        .failure()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("language code xxx is not recognized"));
}

#[test]
fn test_translate_invalid_target_language() {
    word_guru()
        .args(["translate", "word", "eng", "fr"])
        .assert()
        .failure()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("fr is not recognized"));
}

#[test]
fn test_translate_help_shows_both_languages() {
    word_guru()
        .args(["translate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FROM_LANGUAGE"))
        .stdout(predicate::str::contains("TO_LANGUAGE"));
}

#[test]
fn test_setup_init_creates_config_once() {
    let temp_dir = TempDir::new().unwrap();

    word_guru()
        .args(["setup", "init"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let contents = fs::read_to_string(temp_dir.path().join(CONFIG_FILENAME)).unwrap();
    assert!(contents.contains("openai_key"));
    assert!(contents.contains("cache_folder"));

    word_guru()
        .args(["setup", "init"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exists already"));
}

#[test]
fn test_setup_prints_config_in_use() {
    let project = project_with_config("openai_key = \"sk-test\"\n");
    let nested = project.path().join("notes");
    fs::create_dir(&nested).unwrap();

    word_guru()
        .arg("setup")
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains(CONFIG_FILENAME))
        .stdout(predicate::str::contains("sk-test"));
}

#[test]
fn test_setup_without_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_folder = temp_dir.path().join("config");

    word_guru()
        .arg("setup")
        .current_dir(temp_dir.path())
        .env("WORD_GURU_CONFIGURATION_FOLDER", &config_folder)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration file found"));
}

#[test]
fn test_missing_api_key() {
    let project = project_with_config("cache_folder = \"cache\"\n");

    word_guru()
        .args(["get-synonym", "passion", "eng"])
        .current_dir(project.path())
        .env_remove("OPENAI_API_KEY")
        .assert()
        .failure()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("openai_key"));
}

#[test]
fn test_missing_cache_folder_is_rejected() {
    let project = project_with_config(&format!(
        "openai_key = \"sk-test\"\ncache_folder = \"missing\"\nendpoint = \"{CLOSED_ENDPOINT}\"\n"
    ));

    word_guru()
        .args(["get-definition", "happiness", "eng"])
        .current_dir(project.path())
        .assert()
        .failure()
        .code(exitcode::IOERR)
        .stderr(predicate::str::contains("Cache folder does not exist"));

    assert!(!project.path().join("missing").exists());
}

#[test]
fn test_cached_answer_is_served_without_backend() {
    let project = project_with_config(&format!(
        "openai_key = \"sk-test\"\ncache_folder = \"cache\"\nendpoint = \"{CLOSED_ENDPOINT}\"\n"
    ));
    let cache_dir = project.path().join("cache");
    fs::create_dir(&cache_dir).unwrap();

    let prompt = PromptRenderer::new()
        .render("get-simple-definition", &[("language_name", "English")])
        .unwrap();
    fs::write(
        cache_dir.join(cache_key(&prompt, "happiness")),
        "a state of well-being",
    )
    .unwrap();

    word_guru()
        .args(["-q", "get-definition", "happiness", "eng"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("a state of well-being\n");
}

#[test]
fn test_no_cache_skips_cached_answer() {
    let project = project_with_config(&format!(
        "openai_key = \"sk-test\"\ncache_folder = \"cache\"\nendpoint = \"{CLOSED_ENDPOINT}\"\n"
    ));
    let cache_dir = project.path().join("cache");
    fs::create_dir(&cache_dir).unwrap();

    let prompt = PromptRenderer::new()
        .render("get-simple-definition", &[("language_name", "English")])
        .unwrap();
    fs::write(cache_dir.join(cache_key(&prompt, "happiness")), "cached").unwrap();

    // The closed endpoint proves the backend was consulted
    word_guru()
        .args(["-q", "--no-cache", "get-definition", "happiness", "eng"])
        .current_dir(project.path())
        .assert()
        .failure()
        .code(exitcode::UNAVAILABLE)
        .stdout("");
}
