//! Integration tests for command line mode

use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .arg("run")
        .arg("-q")
        .arg("--")
        // Tests must be deterministic and not depend on a user's ~/.config/tally/config.toml.
        .arg("--no-config")
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_basic_arithmetic() {
    let (stdout, _, code) = run_command(&["-c", "5 + 3"]);
    assert_eq!(stdout.trim(), "8");
    assert_eq!(code, 0);
}

#[test]
fn test_precedence_and_parentheses() {
    let (stdout, _, code) = run_command(&["-c", "2+3*4", "-c", "(2+3)*4"]);
    assert_eq!(stdout.trim(), "14\n20");
    assert_eq!(code, 0);
}

#[test]
fn test_auto_strip_equals() {
    let (stdout1, _, _) = run_command(&["-c", "10 + 5"]);
    let (stdout2, _, _) = run_command(&["-c", "=10 + 5"]);
    assert_eq!(stdout1, stdout2);
}

#[test]
fn test_set_and_get_chain() {
    let (stdout, _, code) = run_command(&["-s", "A1=10", "-s", "A2==A1+5", "-g", "A2", "-l", "A2"]);
    assert_eq!(stdout.trim(), "15\n=A1+5");
    assert_eq!(code, 0);
}

#[test]
fn test_missing_cell_prints_empty_line() {
    let (stdout, _, code) = run_command(&["-g", "Z9"]);
    assert_eq!(stdout, "\n");
    assert_eq!(code, 0);
}

#[test]
fn test_circular_exit_code() {
    let (stdout, _, code) = run_command(&["-s", "A1==A2", "-s", "A2==A1", "-g", "A1"]);
    assert_eq!(stdout.trim(), "#Circular");
    assert_eq!(code, 1);
}

#[test]
fn test_division_by_zero() {
    let (stdout, _, code) = run_command(&["-c", "1/0"]);
    assert_eq!(stdout.trim(), "#Error");
    assert_eq!(code, 1);
}

#[test]
fn test_unreferenceable_id_warns() {
    let (_, stderr, code) = run_command(&["-s", "my cell=1"]);
    assert!(stderr.contains("cannot be referenced"));
    assert_eq!(code, 0);
}

#[test]
fn test_unknown_option() {
    let (_, stderr, code) = run_command(&["--bogus"]);
    assert!(stderr.contains("Unknown option"));
    assert_eq!(code, 1);
}

#[test]
fn test_missing_config_file() {
    let (_, stderr, code) = run_command(&["--config", "/nonexistent/tally.toml", "-c", "1"]);
    assert!(stderr.contains("Failed to load config"));
    assert_eq!(code, 1);
}
