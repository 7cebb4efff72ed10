use serde_json::json;
use tune_links::{
    AlbumEntity, Entity, Metadata, MusicalEntity, MusicalEntityInterface, TrackEntity,
};

fn metadata(pairs: &[(&str, &str)]) -> Metadata {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Every entity kind starts out empty and not introspected.
#[test]
fn test_new_entities_start_empty() {
    let album = AlbumEntity::new("Album", "Artist");
    let entities: Vec<Entity> = vec![
        album.clone().into(),
        TrackEntity::new("Track", album).into(),
    ];

    let base = MusicalEntity::new();
    assert_eq!(base.count_links(), 0);
    assert!(!base.is_introspected());

    for entity in &entities {
        assert_eq!(entity.count_links(), 0);
        assert!(entity.links().is_empty());
        assert!(entity.metadata().is_empty());
        assert!(!entity.is_introspected());
    }
}

#[test]
fn test_link_and_introspection_scenario() {
    let mut entity = MusicalEntity::new();
    entity.add_links(vec!["http://a", "http://b"]);

    assert_eq!(entity.count_links(), 2);
    assert_eq!(entity.links(), ["http://a", "http://b"]);

    entity.set_introspected(Some(metadata(&[("artist", "X")])));

    assert!(entity.is_introspected());
    assert_eq!(entity.metadata(), &metadata(&[("artist", "X")]));
}

#[test]
fn test_count_matches_number_of_add_link_calls() {
    let mut entity = Entity::from(AlbumEntity::new("Album", "Artist"));
    let links: Vec<String> = (0..25).map(|i| format!("https://links.example.com/{}", i % 7)).collect();

    for link in &links {
        entity.add_link(link.as_str());
    }

    assert_eq!(entity.count_links(), links.len());
    assert_eq!(entity.links(), links.as_slice());
}

#[test]
fn test_bulk_and_single_appends_agree_across_kinds() {
    let album = AlbumEntity::new("Album", "Artist");

    let mut bulk = TrackEntity::new("Track", album.clone());
    bulk.add_link("first").add_links(["a", "b", "c"]);

    let mut single = TrackEntity::new("Track", album);
    single.add_link("first").add_link("a").add_link("b").add_link("c");

    assert_eq!(bulk, single);
    assert_eq!(bulk.links(), ["first", "a", "b", "c"]);
}

#[test]
fn test_to_map_type_tags() {
    let album = AlbumEntity::new("Album", "Artist");
    let track = TrackEntity::new("Track", album.clone());

    assert_eq!(MusicalEntity::new().to_map()["type"], json!("musical_entity"));
    assert_eq!(album.to_map()["type"], json!(AlbumEntity::TYPE));
    assert_eq!(track.to_map()["type"], json!(TrackEntity::TYPE));
    assert_eq!(Entity::from(track).to_map()["type"], json!("track"));
}

#[test]
fn test_reintrospection_overwrites_metadata() {
    let mut entity = Entity::from(AlbumEntity::new("Album", "Artist"));
    entity
        .set_introspected(Some(metadata(&[("genre", "jazz"), ("year", "1957")])))
        .set_introspected(None);
    assert_eq!(entity.metadata().len(), 2);

    entity.set_introspected(Some(metadata(&[("label", "Blue Note")])));
    assert_eq!(entity.metadata(), &metadata(&[("label", "Blue Note")]));
    assert_eq!(entity.to_map()["metadata"], json!({"label": "Blue Note"}));
}
