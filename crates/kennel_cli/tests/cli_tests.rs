//! End-to-end tests for the `kennel` binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;

fn kennel(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kennel"))
        .args(args)
        .env_remove("KENNEL_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run kennel")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_bark() {
    let output = kennel(&["--name", "Fido", "--age", "2", "bark"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Fido: Woof!\n");
}

#[test]
fn test_greet() {
    let output = kennel(&["greet", "--other", "Fido", "--message", "Hello"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hello, Fido! I'm Rex.\n");
}

#[test]
fn test_has_baby_generations() {
    let output = kennel(&["has-baby", "--generations", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Rex Jr. (age 0)\nRex Jr. Jr. (age 0)\n");
}

#[test]
fn test_age_copy_leaves_original() {
    let output = kennel(&["age", "--set", "5"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Original: Rex (age 3)"));
    assert!(out.contains("Aged:     Rex (age 5)"));
}

#[test]
fn test_show_json_from_config() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("kennel.toml");
    fs::write(&config, "[pet]\nname = \"Buddy\"\nage = 7\n").unwrap();

    let output = kennel(&["--config", config.to_str().unwrap(), "show", "--format", "json"]);
    assert!(output.status.success());

    let pet: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(pet, serde_json::json!({ "name": "Buddy", "age": 7 }));
}

#[test]
fn test_validate_exit_codes() {
    assert_eq!(kennel(&["validate"]).status.code(), Some(0));
    assert_eq!(kennel(&["--age=-1", "validate"]).status.code(), Some(3));
    assert_eq!(kennel(&["--strict", "--age=-1", "show"]).status.code(), Some(3));
}

#[test]
fn test_missing_config_is_invalid_args() {
    let output = kennel(&["--config", "/nonexistent/kennel.toml", "show"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_path_from_env() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("kennel.yaml");
    fs::write(&config, "pet:\n  name: Lassie\n  age: 9\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_kennel"))
        .args(["show"])
        .env("KENNEL_CONFIG", &config)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run kennel");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Lassie (age 9)\n");
}

#[test]
fn test_flags_override_config_file() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("kennel.toml");
    fs::write(&config, "[pet]\nname = \"Buddy\"\nage = 7\n").unwrap();
    let config = config.to_str().unwrap();

    let output = kennel(&["--config", config, "--name", "Fido", "--age", "2", "show"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Fido (age 2)\n");

    // A single flag overrides only its own field
    let output = kennel(&["--config", config, "--age", "4", "show"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Buddy (age 4)\n");
}
