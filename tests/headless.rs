//! Headless integration tests
//!
//! Run with: cargo test --test headless

use std::time::Duration;

use avatarhub::headless::{run_headless, write_snapshot};
use avatarhub_app::config::{Settings, SourceKind};
use avatarhub_app::AvatarLoader;

fn file_settings(path: &std::path::Path) -> Settings {
    let mut settings = Settings::default();
    settings.data.source = SourceKind::File;
    settings.data.path = path.to_path_buf();
    settings
}

#[tokio::test]
async fn test_file_source_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("avatars.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 7, "name": "Travel Vlogger", "description": "Mei", "status": "active"},
            {"id": 8, "name": "Chef", "description": "Luca", "status": "inactive"}
        ]"#,
    )
    .unwrap();

    let mut settings = file_settings(&path);
    settings.user.username = "Priya".to_string();
    let loader = AvatarLoader::from_settings(&settings.data);

    let snapshot = run_headless(settings, loader).await.unwrap();
    assert!(!snapshot.is_failure());

    let mut out = Vec::new();
    write_snapshot(&mut out, &snapshot).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["username"], "Priya");
    assert_eq!(json["loading"], false);
    assert_eq!(json["avatars"][0]["name"], "Travel Vlogger");
    assert_eq!(json["avatars"][1]["status"], "inactive");
    assert_eq!(json["stats"][0]["value"], 2);
    assert_eq!(json["stats"][1]["value"], 1);
    assert_eq!(json["stats"][2]["value"], "73%");
}

#[tokio::test]
async fn test_malformed_file_yields_error_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("avatars.json");
    std::fs::write(&path, "not json").unwrap();

    let settings = file_settings(&path);
    let loader = AvatarLoader::from_settings(&settings.data);
    let snapshot = run_headless(settings, loader).await.unwrap();

    assert!(snapshot.is_failure());
    assert!(snapshot.avatars.is_empty());

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["stats"][0]["value"], 0);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("JSON"));
    assert!(error.contains(&path.display().to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_configured_delay_still_resolves() {
    let mut settings = Settings::default();
    settings.data.delay_ms = 2_000;
    let loader = AvatarLoader::from_settings(&settings.data);
    assert_eq!(Duration::from_millis(settings.data.delay_ms).as_secs(), 2);

    let snapshot = run_headless(settings, loader).await.unwrap();
    assert_eq!(snapshot.avatars.len(), 3);
}
