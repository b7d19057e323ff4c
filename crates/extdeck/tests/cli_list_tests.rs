//! End-to-end tests for `extdeck list`
//!
//! Runs the built binary against a temporary data file with an isolated
//! HOME so no user config is picked up.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const DATA: &str = r#"[
  {"name": "DevLens", "description": "Inspect layouts", "logo": "./assets/images/logo-devlens.svg", "isActive": true},
  {"name": "StyleSpy", "description": "Copy CSS", "logo": "./assets/images/logo-style-spy.svg", "isActive": false},
  {"name": "SpeedBoost", "description": "Faster pages", "logo": "", "isActive": false}
]"#;

fn extdeck(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_extdeck"))
        .args(args)
        .env("HOME", home)
        .env_remove("EXTDECK_SOURCE")
        .env_remove("EXTDECK_LOCALE")
        .env_remove("EXTDECK_THEME")
        .env_remove("EXTDECK_HTTP_TIMEOUT_SECS")
        .env_remove("EXTDECK_NO_COLOR")
        .output()
        .expect("failed to run extdeck")
}

fn data_file(dir: &TempDir) -> String {
    let file = dir.path().join("data.json");
    std::fs::write(&file, DATA).unwrap();
    file.to_str().unwrap().to_string()
}

#[test]
fn test_list_json_inactive() {
    let home = TempDir::new().unwrap();
    let source = data_file(&home);

    let output = extdeck(
        home.path(),
        &["list", "--json", "--filter", "inactive", "--source", &source],
    );
    assert!(output.status.success());

    let frame: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cards = frame["view"]["cards"].as_array().unwrap();
    let ids: Vec<u64> = cards.iter().map(|c| c["id"].as_u64().unwrap()).collect();

    assert_eq!(frame["view"]["kind"], "cards");
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(
        cards[1]["fallbackLogo"],
        "https://via.placeholder.com/48x48/667eea/ffffff?text=S"
    );
}

#[test]
fn test_list_table_output() {
    let home = TempDir::new().unwrap();
    let source = data_file(&home);

    let output = extdeck(home.path(), &["list", "-s", &source, "--filter", "active"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DevLens"));
    assert!(!stdout.contains("StyleSpy"));
    // Redirected output carries no color codes
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn test_list_missing_source_fails_with_placeholder() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("missing.json");

    let output = extdeck(
        home.path(),
        &["list", "--json", "--source", missing.to_str().unwrap()],
    );
    assert!(!output.status.success());

    let frame: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(frame["view"]["kind"], "load-failed");
    assert_eq!(frame["view"]["message"], "Failed to load extensions");
}

#[test]
fn test_list_respects_locale_from_config() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".extdeck");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.yaml"), "locale: pt-BR\n").unwrap();
    std::fs::write(home.path().join("empty.json"), "[]").unwrap();

    let output = extdeck(
        home.path(),
        &[
            "list",
            "--json",
            "--source",
            home.path().join("empty.json").to_str().unwrap(),
        ],
    );
    assert!(output.status.success());

    let frame: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(frame["view"]["kind"], "empty");
    assert_eq!(
        frame["view"]["message"],
        "Nenhuma extensão encontrada para este filtro"
    );
}

#[test]
fn test_version_json() {
    let home = TempDir::new().unwrap();
    let output = extdeck(home.path(), &["version", "--json"]);
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(semver::Version::parse(info["version"].as_str().unwrap()).is_ok());
}
