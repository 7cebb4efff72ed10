use clap::Parser;
use tune_links::core::ConfigProvider;
use tune_links::utils::error::ErrorSeverity;
use tune_links::utils::{logger, validation::Validate};
use tune_links::{CatalogConfig, CatalogError, CliConfig, IntrospectionEngine, MusicalEntityInterface};

fn exit_with(e: &CatalogError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting tune-links");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    // 載入並驗證目錄
    tracing::info!("📁 Loading catalog from: {}", cli.catalog);
    let mut config = CatalogConfig::from_file(&cli.catalog).unwrap_or_else(|e| exit_with(&e));
    cli.apply_overrides(&mut config);
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let mut entities = config.build_entities().unwrap_or_else(|e| exit_with(&e));
    tracing::info!(
        "✅ Catalog '{}' loaded with {} entities",
        config.catalog_name(),
        entities.len()
    );

    if config.introspection_enabled() {
        let engine = IntrospectionEngine::from_config(config.metadata_table(), &config);
        match engine.run(&mut entities).await {
            Ok(report) => tracing::info!(
                "🔍 {} of {} entities introspected in {} ms",
                report.introspected,
                report.total(),
                (report.finished_at - report.started_at).num_milliseconds()
            ),
            Err(e) => exit_with(&e),
        }
    } else {
        tracing::info!("Introspection disabled, printing links only");
    }

    let maps: Vec<_> = entities.iter().map(|entity| entity.to_map()).collect();
    let encoded = if cli.pretty {
        serde_json::to_string_pretty(&maps)
    } else {
        serde_json::to_string(&maps)
    };
    let output = encoded.unwrap_or_else(|e| exit_with(&CatalogError::from(e)));

    println!("{}", output);
    Ok(())
}
