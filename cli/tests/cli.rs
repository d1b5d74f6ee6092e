//! Integration tests for the reagent binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_tools_subcommand_lists_all_tools() {
    let mut cmd = Command::cargo_bin("reagent").unwrap();
    cmd.arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("wikipedia"))
        .stdout(predicate::str::contains("calculate"))
        .stdout(predicate::str::contains("simon_blog_search"))
        .stdout(predicate::str::contains("generate_image"));
}

#[test]
fn test_help_mentions_interactive_and_single_question_modes() {
    let mut cmd = Command::cargo_bin("reagent").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ReAct"))
        .stdout(predicate::str::contains("--max-turns"));
}

#[test]
fn test_missing_credential_is_a_startup_error() {
    let mut cmd = Command::cargo_bin("reagent").unwrap();
    cmd.arg("a question")
        .env_remove("REAGENT_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .current_dir(std::env::temp_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
}
