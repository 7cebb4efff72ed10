use crate::domain::album::AlbumEntity;
use crate::domain::entity::{EntityMap, MusicalEntity, MusicalEntityInterface};
use crate::domain::track::TrackEntity;
use serde::{Deserialize, Serialize};

/// Any concrete entity the service knows how to aggregate links for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entity {
    Track(TrackEntity),
    Album(AlbumEntity),
}

impl Entity {
    pub fn as_track(&self) -> Option<&TrackEntity> {
        match self {
            Entity::Track(track) => Some(track),
            Entity::Album(_) => None,
        }
    }

    pub fn as_album(&self) -> Option<&AlbumEntity> {
        match self {
            Entity::Album(album) => Some(album),
            Entity::Track(_) => None,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Entity::Track(track) => track.title(),
            Entity::Album(album) => album.title(),
        }
    }

    pub fn artist(&self) -> &str {
        match self {
            Entity::Track(track) => track.artist(),
            Entity::Album(album) => album.artist(),
        }
    }
}

impl MusicalEntityInterface for Entity {
    fn entity_type(&self) -> &'static str {
        match self {
            Entity::Track(track) => track.entity_type(),
            Entity::Album(album) => album.entity_type(),
        }
    }

    fn entity(&self) -> &MusicalEntity {
        match self {
            Entity::Track(track) => track.entity(),
            Entity::Album(album) => album.entity(),
        }
    }

    fn entity_mut(&mut self) -> &mut MusicalEntity {
        match self {
            Entity::Track(track) => track.entity_mut(),
            Entity::Album(album) => album.entity_mut(),
        }
    }

    fn to_map(&self) -> EntityMap {
        match self {
            Entity::Track(track) => track.to_map(),
            Entity::Album(album) => album.to_map(),
        }
    }

    fn label(&self) -> String {
        match self {
            Entity::Track(track) => track.label(),
            Entity::Album(album) => album.label(),
        }
    }
}

impl From<TrackEntity> for Entity {
    fn from(track: TrackEntity) -> Self {
        Entity::Track(track)
    }
}

impl From<AlbumEntity> for Entity {
    fn from(album: AlbumEntity) -> Self {
        Entity::Album(album)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_delegates_to_variant() {
        let album = AlbumEntity::new("Blue Train", "John Coltrane");
        let mut entity = Entity::from(TrackEntity::new("Moment's Notice", album));
        entity.add_link("https://music.apple.com/track/1");

        assert_eq!(entity.entity_type(), "track");
        assert_eq!(entity.artist(), "John Coltrane");
        assert_eq!(entity.count_links(), 1);
        assert!(entity.as_track().is_some());
        assert!(entity.as_album().is_none());
        assert_eq!(entity.to_map()["type"], json!("track"));
    }

    #[test]
    fn test_entity_json_carries_type_tag() {
        let mut album = AlbumEntity::new("Blue Train", "John Coltrane");
        album.add_link("https://a");
        let entity = Entity::from(album);

        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["type"], json!("album"));
        assert_eq!(value["links"], json!(["https://a"]));
        assert_eq!(value["introspected"], json!(false));

        let restored: Entity = serde_json::from_value(value).unwrap();
        assert_eq!(restored, entity);
    }
}
