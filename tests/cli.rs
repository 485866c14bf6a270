use std::process::{Command, Output};

fn rbcurl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rbcurl"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("rbcurl binary runs")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_url_prints_usage_and_exits_1() {
    let output = rbcurl(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).starts_with("USAGE:\nrbcurl http://requestb.in/1234asdf?inspect\n"));
}

#[test]
fn test_unrecognized_url_exits_1() {
    let output = rbcurl(&["https://example.com/1234asdf"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Error: Unrecognized RequestBin URL."));
}

#[test]
fn test_malformed_escape_exits_1() {
    let output = rbcurl(&["requestb.in/ab%zz"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unrecognized RequestBin URL."));
}

#[test]
fn test_argument_error_exits_1_not_2() {
    let output = rbcurl(&["requestb.in/abc", "--bogus"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--bogus"));
}

#[test]
fn test_help_and_version_exit_0() {
    let help = rbcurl(&["--help"]);
    assert_eq!(help.status.code(), Some(0));
    let text = String::from_utf8_lossy(&help.stdout);
    assert!(text.contains("Usage: rbcurl"), "{text}");
    assert!(text.contains("--pretty"));

    let version = rbcurl(&["--version"]);
    assert_eq!(version.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&version.stdout).trim(),
        format!("rbcurl {}", env!("CARGO_PKG_VERSION"))
    );
}
