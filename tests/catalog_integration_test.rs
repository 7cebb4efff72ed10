use anyhow::Result;
use serde_json::json;
use tempfile::TempDir;
use tune_links::core::ConfigProvider;
use tune_links::utils::validation::Validate;
use tune_links::{CatalogConfig, CatalogError, IntrospectionEngine, MusicalEntityInterface};

const CATALOG: &str = r#"
[catalog]
name = "integration"
description = "Catalog used by the integration tests"

[introspection]
enabled = true
fail_fast = false

[[albums]]
title = "Kind of Blue"
artist = "Miles Davis"
links = ["https://open.spotify.com/album/kob", "https://www.deezer.com/album/kob"]

[[albums]]
title = "A Love Supreme"
artist = "John Coltrane"

[[tracks]]
title = "So What (Live)"
album = "Kind of Blue"
links = ["https://www.deezer.com/track/so-what"]

[[tracks]]
title = "Acknowledgement"
album = "A Love Supreme"
links = ["https://music.apple.com/track/ack"]

[[metadata]]
link = "https://www.deezer.com/album/kob"
values = { year = "1959", label = "Columbia" }

[[metadata]]
link = "https://www.deezer.com/track/so-what"
values = { duration = "562" }
"#;

fn write_catalog(dir: &TempDir, content: &str) -> Result<String> {
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, content)?;
    Ok(path.to_string_lossy().into_owned())
}

/// 完整流程：載入、驗證、建立實體、查詢 metadata、輸出 map
#[tokio::test]
async fn test_catalog_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_catalog(&temp_dir, CATALOG)?;

    let config = CatalogConfig::from_file(&path)?;
    config.validate()?;
    assert!(config.introspection_enabled());

    let mut entities = config.build_entities()?;
    assert_eq!(entities.len(), 4);

    let engine = IntrospectionEngine::from_config(config.metadata_table(), &config);
    let report = engine.run(&mut entities).await?;

    assert_eq!(report.introspected, 4);
    assert_eq!(report.failed, 0);
    assert!(report.finished_at >= report.started_at);

    // 有命中的實體帶 metadata，沒命中的只標記為已查詢
    assert_eq!(entities[0].metadata()["label"], "Columbia");
    assert!(entities[1].is_introspected());
    assert!(entities[1].metadata().is_empty());
    assert_eq!(entities[2].metadata()["duration"], "562");
    assert!(entities[3].metadata().is_empty());

    let maps: Vec<_> = entities.iter().map(|e| e.to_map()).collect();
    assert_eq!(maps[2]["type"], json!("track"));
    assert_eq!(maps[2]["safe_title"], json!("So What"));
    assert_eq!(maps[2]["artist"], json!("Miles Davis"));
    assert_eq!(maps[2]["album"]["links"].as_array().map(Vec::len), Some(2));
    assert_eq!(maps[2]["metadata"], json!({"duration": "562"}));
    assert_eq!(maps[3]["metadata"], json!({}));

    Ok(())
}

#[tokio::test]
async fn test_second_run_skips_everything() -> Result<()> {
    let config = CatalogConfig::from_toml_str(CATALOG)?;
    let mut entities = config.build_entities()?;
    let engine = IntrospectionEngine::from_config(config.metadata_table(), &config);

    engine.run(&mut entities).await?;
    let report = engine.run(&mut entities).await?;

    assert_eq!(report.skipped, 4);
    assert_eq!(report.introspected, 0);
    Ok(())
}

#[tokio::test]
async fn test_forced_run_picks_up_new_metadata() -> Result<()> {
    let mut config = CatalogConfig::from_toml_str(CATALOG)?;
    let mut entities = config.build_entities()?;

    IntrospectionEngine::from_config(config.metadata_table(), &config)
        .run(&mut entities)
        .await?;
    assert!(entities[3].metadata().is_empty());

    let mut table = config.metadata_table();
    table.insert(
        "https://music.apple.com/track/ack",
        [("mood".to_string(), "spiritual".to_string())].into(),
    );
    config.introspection_mut().force = Some(true);

    let report = IntrospectionEngine::from_config(table, &config)
        .run(&mut entities)
        .await?;

    assert_eq!(report.introspected, 4);
    assert_eq!(entities[3].metadata()["mood"], "spiritual");
    Ok(())
}

#[test]
fn test_invalid_catalog_file_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_catalog(
        &temp_dir,
        r#"
[catalog]
name = "  "
"#,
    )?;

    let config = CatalogConfig::from_file(&path)?;
    let err = config.validate().unwrap_err();

    assert!(matches!(err, CatalogError::InvalidConfigValueError { ref field, .. } if field == "catalog.name"));
    assert!(err.user_friendly_message().contains("invalid"));
    Ok(())
}
