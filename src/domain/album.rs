use crate::core::title;
use crate::domain::entity::{base_map, EntityMap, MusicalEntity, MusicalEntityInterface};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumEntity {
    title: String,
    artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    picture: Option<String>,
    #[serde(flatten)]
    entity: MusicalEntity,
}

impl AlbumEntity {
    pub const TYPE: &'static str = "album";

    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            picture: None,
            entity: MusicalEntity::new(),
        }
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title without edition extras, suitable for matching across platforms.
    pub fn safe_title(&self) -> String {
        title::safe_title(&self.title)
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }
}

impl MusicalEntityInterface for AlbumEntity {
    fn entity_type(&self) -> &'static str {
        Self::TYPE
    }

    fn entity(&self) -> &MusicalEntity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut MusicalEntity {
        &mut self.entity
    }

    fn to_map(&self) -> EntityMap {
        let mut map = base_map(Self::TYPE);
        map.insert("title".to_string(), Value::String(self.title.clone()));
        map.insert("safe_title".to_string(), Value::String(self.safe_title()));
        map.insert("artist".to_string(), Value::String(self.artist.clone()));
        map.insert(
            "picture".to_string(),
            self.picture.clone().map(Value::String).unwrap_or(Value::Null),
        );
        self.entity.extend_map(&mut map);
        map
    }

    fn label(&self) -> String {
        format!("album '{}' by {}", self.title, self.artist)
    }
}
