use crate::core::title;
use crate::domain::album::AlbumEntity;
use crate::domain::entity::{base_map, EntityMap, MusicalEntity, MusicalEntityInterface};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntity {
    title: String,
    album: AlbumEntity,
    #[serde(flatten)]
    entity: MusicalEntity,
}

impl TrackEntity {
    pub const TYPE: &'static str = "track";

    pub fn new(title: impl Into<String>, album: AlbumEntity) -> Self {
        Self {
            title: title.into(),
            album,
            entity: MusicalEntity::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn safe_title(&self) -> String {
        title::safe_title(&self.title)
    }

    pub fn album(&self) -> &AlbumEntity {
        &self.album
    }

    /// A track is credited to its album's artist.
    pub fn artist(&self) -> &str {
        self.album.artist()
    }
}

impl MusicalEntityInterface for TrackEntity {
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
        map.insert("artist".to_string(), Value::String(self.artist().to_string()));
        map.insert("album".to_string(), Value::Object(self.album.to_map()));
        self.entity.extend_map(&mut map);
        map
    }

    fn label(&self) -> String {
        format!("track '{}' by {}", self.title, self.artist())
    }
}
