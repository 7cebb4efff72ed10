use crate::adapters::lookup::MetadataTable;
use crate::core::{ConfigProvider, Entity, Metadata, MusicalEntityInterface};
use crate::domain::album::AlbumEntity;
use crate::domain::track::TrackEntity;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: CatalogInfo,
    pub introspection: Option<IntrospectionConfig>,
    #[serde(default)]
    pub albums: Vec<AlbumDefinition>,
    #[serde(default)]
    pub tracks: Vec<TrackDefinition>,
    #[serde(default)]
    pub metadata: Vec<MetadataDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntrospectionConfig {
    pub enabled: Option<bool>,
    pub force: Option<bool>,
    pub fail_fast: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDefinition {
    pub title: String,
    pub artist: String,
    pub picture: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDefinition {
    pub title: String,
    pub album: String, // 對應 [[albums]] 的 title
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataDefinition {
    pub link: String,
    pub values: HashMap<String, String>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CDN_HOST})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證目錄內容
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("catalog.name", &self.catalog.name)?;

        let mut album_titles = HashSet::new();
        for (index, album) in self.albums.iter().enumerate() {
            let field = format!("albums[{}]", index);
            validation::validate_non_empty_string(&format!("{}.title", field), &album.title)?;
            validation::validate_non_empty_string(&format!("{}.artist", field), &album.artist)?;
            if let Some(picture) = &album.picture {
                validation::validate_url(&format!("{}.picture", field), picture)?;
            }
            validation::validate_links(&format!("{}.links", field), &album.links)?;

            if !album_titles.insert(album.title.as_str()) {
                return Err(CatalogError::ConfigValidationError {
                    field: format!("{}.title", field),
                    message: format!("Duplicate album title '{}'", album.title),
                });
            }
        }

        for (index, track) in self.tracks.iter().enumerate() {
            let field = format!("tracks[{}]", index);
            validation::validate_non_empty_string(&format!("{}.title", field), &track.title)?;
            validation::validate_links(&format!("{}.links", field), &track.links)?;

            if !album_titles.contains(track.album.as_str()) {
                return Err(CatalogError::UnknownAlbumError {
                    track: track.title.clone(),
                    album: track.album.clone(),
                });
            }
        }

        let mut metadata_links = HashSet::new();
        for (index, entry) in self.metadata.iter().enumerate() {
            let field = format!("metadata[{}]", index);
            validation::validate_url(&format!("{}.link", field), &entry.link)?;
            for key in entry.values.keys() {
                validation::validate_non_empty_string(&format!("{}.values", field), key)?;
            }

            if !metadata_links.insert(entry.link.as_str()) {
                return Err(CatalogError::ConfigValidationError {
                    field: format!("{}.link", field),
                    message: format!("Duplicate metadata entry for '{}'", entry.link),
                });
            }
        }

        Ok(())
    }

    pub fn introspection_mut(&mut self) -> &mut IntrospectionConfig {
        self.introspection.get_or_insert_with(IntrospectionConfig::default)
    }

    /// 依序建立專輯與曲目，曲目內含其專輯的副本
    pub fn build_entities(&self) -> Result<Vec<Entity>> {
        let mut albums: HashMap<&str, AlbumEntity> = HashMap::new();
        let mut entities = Vec::with_capacity(self.albums.len() + self.tracks.len());

        for definition in &self.albums {
            let mut album = AlbumEntity::new(&definition.title, &definition.artist);
            if let Some(picture) = &definition.picture {
                album = album.with_picture(picture);
            }
            album.add_links(definition.links.iter().cloned());

            if albums.insert(definition.title.as_str(), album.clone()).is_some() {
                return Err(CatalogError::ConfigValidationError {
                    field: "albums".to_string(),
                    message: format!("Duplicate album title '{}'", definition.title),
                });
            }
            entities.push(Entity::from(album));
        }

        for definition in &self.tracks {
            let album = albums.get(definition.album.as_str()).cloned().ok_or_else(|| {
                CatalogError::UnknownAlbumError {
                    track: definition.title.clone(),
                    album: definition.album.clone(),
                }
            })?;

            let mut track = TrackEntity::new(&definition.title, album);
            track.add_links(definition.links.iter().cloned());
            entities.push(Entity::from(track));
        }

        tracing::debug!(
            "Built {} albums and {} tracks from catalog '{}'",
            self.albums.len(),
            self.tracks.len(),
            self.catalog.name
        );

        Ok(entities)
    }

    pub fn metadata_table(&self) -> MetadataTable {
        let mut table = MetadataTable::new();
        for entry in &self.metadata {
            let values: Metadata = entry.values.clone();
            table.insert(entry.link.clone(), values);
        }
        table
    }
}

impl ConfigProvider for CatalogConfig {
    fn catalog_name(&self) -> &str {
        &self.catalog.name
    }

    fn introspection_enabled(&self) -> bool {
        self.introspection
            .as_ref()
            .and_then(|i| i.enabled)
            .unwrap_or(true)
    }

    fn force_introspection(&self) -> bool {
        self.introspection
            .as_ref()
            .and_then(|i| i.force)
            .unwrap_or(false)
    }

    fn fail_fast(&self) -> bool {
        self.introspection
            .as_ref()
            .and_then(|i| i.fail_fast)
            .unwrap_or(false)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
