//! End-to-end tests of the compiled binary's CLI mode
//!
//! Every run happens in a fresh temp dir so no local config.toml or .env
//! leaks in.

use std::process::{Command, Output};

use tempfile::TempDir;

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shortlink-console"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("SLC__API__BASE_URL")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute binary")
}

/// A local address nothing listens on
fn closed_api_url() -> String {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    format!("http://{}", addr)
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shortlink-console"));
    assert!(stdout.contains("shorten"));
    assert!(stdout.contains("list"));
}

#[test]
fn test_cli_shorten_empty_input() {
    let dir = TempDir::new().unwrap();
    let api_url = closed_api_url();
    let output = run(&dir, &["--api-url", &api_url, "shorten", "   "]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter a URL to shorten"));
}

#[test]
fn test_cli_list_unreachable_api() {
    let dir = TempDir::new().unwrap();
    let api_url = closed_api_url();
    let output = run(&dir, &["--api-url", &api_url, "list"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to fetch URL list"));
}

#[test]
fn test_cli_rejects_invalid_api_url() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["--api-url", "ftp://example.com", "list"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_config_generate() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["config", "generate", "generated.toml", "--force"]);

    assert!(output.status.success());
    let content = std::fs::read_to_string(dir.path().join("generated.toml")).unwrap();
    assert!(content.contains("[api]"));
    assert!(content.contains("http://localhost:5000"));
}

#[test]
fn test_cli_config_file_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        format!("[api]\nbase_url = \"{}\"\ntimeout_secs = 1\n", closed_api_url()),
    )
    .unwrap();

    let output = run(&dir, &["list"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to fetch URL list"));
}
