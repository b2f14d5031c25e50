//! CLI integration tests that run the actual stackswipe binary.
//! Each test points the binary at its own preferences file.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn stackswipe(prefs: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stackswipe"));
    cmd.env("STACKSWIPE_PREFS", prefs);
    cmd
}

fn run(prefs: &Path, args: &[&str]) -> Output {
    stackswipe(prefs)
        .args(args)
        .output()
        .expect("failed to execute")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("invalid JSON output")
}

#[test]
fn test_cli_catalog_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("prefs.json"), &["catalog", "--json"]);
    assert!(
        output.status.success(),
        "stackswipe catalog failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 45);
}

#[test]
fn test_cli_catalog_unknown_category() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("prefs.json"), &["catalog", "--category", "gaming"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_stacks_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("prefs.json"), &["stacks", "--json"]);
    assert!(output.status.success());
    let stacks = stdout_json(&output);
    assert_eq!(stacks[0]["key"], "MERN");
}

#[test]
fn test_cli_like_then_result() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");

    let output = run(&prefs, &["like", "react", "nodejs", "mongodb", "express"]);
    assert!(output.status.success());

    let output = run(&prefs, &["likes", "--json"]);
    let liked = stdout_json(&output);
    assert_eq!(liked.as_array().unwrap().len(), 4);

    let output = run(&prefs, &["result", "--json"]);
    assert!(output.status.success());
    let result = stdout_json(&output);
    assert_eq!(result["bestStack"], "MERN");
    assert!(result["recommendations"].as_array().unwrap().len() <= 3);
}

#[test]
fn test_cli_like_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");
    run(&prefs, &["like", "vue"]);
    run(&prefs, &["like", "vue"]);
    let liked = stdout_json(&run(&prefs, &["likes", "--json"]));
    assert_eq!(liked, serde_json::json!(["vue"]));
}

#[test]
fn test_cli_like_rejects_unknown_id() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");
    let output = run(&prefs, &["like", "react", "cobol"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cobol"));
    // Nothing is written when any id is unknown
    let liked = stdout_json(&run(&prefs, &["likes", "--json"]));
    assert_eq!(liked, serde_json::json!([]));
}

#[test]
fn test_cli_reset_clears_likes() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");
    run(&prefs, &["like", "django"]);
    assert!(run(&prefs, &["reset"]).status.success());
    let liked = stdout_json(&run(&prefs, &["likes", "--json"]));
    assert_eq!(liked, serde_json::json!([]));
}

#[test]
fn test_cli_result_without_likes_uses_default_stack() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("prefs.json"), &["result", "--json"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["bestStack"], "MERN");
}

#[test]
fn test_cli_swipe_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");

    let mut child = stackswipe(&prefs)
        .args(["swipe", "--size", "3", "--seed", "7", "--category", "database"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"y\nmaybe\nn\ny\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(
        output.status.success(),
        "stackswipe swipe failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let liked = stdout_json(&run(&prefs, &["likes", "--json"]));
    assert_eq!(liked.as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_swipe_quit_saves_partial() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");

    let mut child = stackswipe(&prefs)
        .args(["swipe", "--size", "5", "--seed", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn");
    child.stdin.take().unwrap().write_all(b"y\nq\n").unwrap();
    assert!(child.wait_with_output().unwrap().status.success());

    let liked = stdout_json(&run(&prefs, &["likes", "--json"]));
    assert_eq!(liked.as_array().unwrap().len(), 1);
}

#[test]
fn test_cli_config_prints_toml() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("prefs.json"), &["config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[swipe]"));
    assert!(stdout.contains("deck_size"));
}

/// Expects nothing listening on the default advisor endpoint.
#[test]
#[ignore]
fn test_cli_advise_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("prefs.json");
    run(&prefs, &["like", "swift"]);
    let output = run(&prefs, &["advise", "--json"]);
    assert!(output.status.success());
    let advice = stdout_json(&output);
    assert_eq!(advice["source"], "fallback");
    assert_eq!(advice["payload"]["frontend"][0]["name"], "SwiftUI");
}
