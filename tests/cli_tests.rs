//! CLI command tests against section files on disk

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use sidebar_sections::cli::{Commands, ConfigCommands};
use sidebar_sections::config::StaticConfig;
use sidebar_sections::errors::SidebarError;
use sidebar_sections::interfaces::cli::run_cli_command;
use sidebar_sections::models::SidebarSectionData;

fn write_section(dir: &TempDir, name: &str, value: serde_json::Value) -> String {
    let path = dir.path().join(name);
    fs::write(&path, value.to_string()).unwrap();
    path.to_string_lossy().into_owned()
}

fn valid_section() -> serde_json::Value {
    json!({
        "id": 5,
        "title": "Community",
        "public": true,
        "links": [
            {"id": 1, "icon": "link", "name": "Latest", "value": "/latest", "segment": "primary"},
            {"id": 2, "icon": "link", "name": "Top", "value": "/top", "segment": "primary"},
            {"id": 3, "icon": "book", "name": "Blog", "value": "https://blog.example.com", "segment": "secondary"}
        ]
    })
}

#[tokio::test]
async fn test_validate_accepts_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = write_section(&dir, "ok.json", valid_section());
    let config = StaticConfig::default();

    run_cli_command(Commands::Validate { file_path: path }, &config)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_validate_rejects_bad_link() {
    let dir = TempDir::new().unwrap();
    let mut section = valid_section();
    section["links"][1]["value"] = json!("/not-a-route");
    let path = write_section(&dir, "bad.json", section);
    let config = StaticConfig::default();

    let err = run_cli_command(Commands::Validate { file_path: path }, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, SidebarError::Validation(_)));
}

#[tokio::test]
async fn test_validate_missing_file() {
    let config = StaticConfig::default();
    let err = run_cli_command(
        Commands::Validate {
            file_path: "/definitely/not/here.json".into(),
        },
        &config,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SidebarError::FileOperation(_)));
}

#[tokio::test]
async fn test_reorder_writes_back() {
    let dir = TempDir::new().unwrap();
    let path = write_section(&dir, "s.json", valid_section());
    let config = StaticConfig::default();

    // Blog (#3) dropped above Latest (#1)
    run_cli_command(
        Commands::Reorder {
            file_path: path.clone(),
            from: 3,
            to: 1,
            below: false,
            write: true,
        },
        &config,
    )
    .await
    .unwrap();

    let saved: SidebarSectionData =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let names: Vec<_> = saved
        .links
        .iter()
        .map(|l| (l.name.as_deref().unwrap(), l.segment.to_string()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("Blog", "primary".to_string()),
            ("Latest", "primary".to_string()),
            ("Top", "primary".to_string())
        ]
    );
}

#[tokio::test]
async fn test_reorder_unknown_link_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let path = write_section(&dir, "s.json", valid_section());
    let before = fs::read_to_string(&path).unwrap();
    let config = StaticConfig::default();

    let err = run_cli_command(
        Commands::Reorder {
            file_path: path.clone(),
            from: 42,
            to: 1,
            below: false,
            write: true,
        },
        &config,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SidebarError::NotFound(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn test_save_against_unreachable_server() {
    let dir = TempDir::new().unwrap();
    let path = write_section(&dir, "s.json", valid_section());
    let mut config = StaticConfig::default();
    config.site.base_url = "http://127.0.0.1:9".into();
    config.http.timeout_secs = 1;

    let err = run_cli_command(Commands::Save { file_path: path }, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, SidebarError::Transport(_)));
}

#[tokio::test]
async fn test_config_generate_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let output = path.to_string_lossy().into_owned();
    let config = StaticConfig::default();

    let generate = |force| Commands::Config {
        action: ConfigCommands::Generate {
            output_path: Some(output.clone()),
            force,
        },
    };

    run_cli_command(generate(false), &config).await.unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(StaticConfig::try_load(&output).is_ok());
    assert!(!written.is_empty());

    let err = run_cli_command(generate(false), &config).await.unwrap_err();
    assert!(matches!(err, SidebarError::FileOperation(_)));

    run_cli_command(generate(true), &config).await.unwrap();
}
