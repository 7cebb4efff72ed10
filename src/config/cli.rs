use crate::config::toml_config::CatalogConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tune-links")]
#[command(about = "Aggregate and introspect the links of a music catalog")]
pub struct CliConfig {
    /// Path to the TOML catalog
    #[arg(short, long, default_value = "catalog.toml")]
    pub catalog: String,

    /// Re-introspect entities that already carry metadata
    #[arg(long)]
    pub force: bool,

    /// Stop at the first failed lookup
    #[arg(long)]
    pub fail_fast: bool,

    /// Skip introspection and only print the link maps
    #[arg(long)]
    pub no_introspection: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列旗標覆蓋目錄中的 [introspection] 設定
    pub fn apply_overrides(&self, config: &mut CatalogConfig) {
        if self.force {
            config.introspection_mut().force = Some(true);
        }
        if self.fail_fast {
            config.introspection_mut().fail_fast = Some(true);
        }
        if self.no_introspection {
            config.introspection_mut().enabled = Some(false);
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("catalog", &self.catalog)
    }
}
