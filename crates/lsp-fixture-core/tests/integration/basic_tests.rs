use std::error::Error as _;

use lsp_fixture_core::{Error, FixtureConfig, User, ValidationError, run};

use crate::common::test_utils::config_fixture_path;

#[allow(clippy::expect_used)]
fn run_fixture(name: &str) -> (lsp_fixture_core::Result<()>, String) {
    let config =
        FixtureConfig::load_from(&config_fixture_path(name)).expect("Failed to load fixture");
    let mut out = Vec::new();
    let result = run(&config, &mut out);
    (result, String::from_utf8(out).expect("Output should be UTF-8"))
}

#[test]
fn test_default_fixture_matches_builtin() {
    let config = FixtureConfig::load_from(&config_fixture_path("default.toml"));
    assert_eq!(config.ok(), Some(FixtureConfig::default()));
}

#[test]
fn test_default_fixture_output() {
    let (result, output) = run_fixture("default.toml");
    assert!(result.is_ok());

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Name: John Doe, Age: 30, Email: john@example.com",
            "Age as string: 30",
            "Name: Jane, Age: 25, Email: jane@example.com",
        ]
    );
}

#[test]
fn test_empty_name_fixture() {
    let (result, output) = run_fixture("empty_name.toml");
    assert!(output.is_empty());

    let Err(err) = result else {
        panic!("Expected CreateUser error");
    };
    assert_eq!(err.to_string(), "Error creating user");
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("name cannot be empty")
    );
}

#[test]
fn test_negative_age_fixture() {
    let (result, output) = run_fixture("negative_age.toml");
    assert!(output.is_empty());
    assert!(matches!(
        result,
        Err(Error::CreateUser(ValidationError::NegativeAge { age: -5 }))
    ));
}

#[test]
fn test_user_is_immutable_snapshot() {
    let Ok(user) = User::new("Jane", 25, "jane@example.com") else {
        panic!("valid inputs should construct");
    };
    let copy = user.clone();

    assert_eq!(user, copy);
    assert_eq!(format!("{copy}"), user.describe());
}
