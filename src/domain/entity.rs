//! Base data shared by every musical entity: the external links pointing at
//! it and the metadata attached once it has been introspected.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Descriptive key/value data attached by introspection.
pub type Metadata = HashMap<String, String>;

/// Generic representation produced by [`MusicalEntityInterface::to_map`].
pub type EntityMap = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicalEntity {
    #[serde(default)]
    links: Vec<String>,
    #[serde(default)]
    introspected: bool,
    #[serde(default)]
    metadata: Metadata,
}

impl MusicalEntity {
    pub const TYPE: &'static str = "musical_entity";

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link. The value is stored as given, no format check is made.
    pub fn add_link(&mut self, link: impl Into<String>) -> &mut Self {
        self.links.push(link.into());
        self
    }

    pub fn add_links<I, S>(&mut self, links: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links.extend(links.into_iter().map(Into::into));
        self
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn count_links(&self) -> usize {
        self.links.len()
    }

    pub fn is_introspected(&self) -> bool {
        self.introspected
    }

    /// Marks the entity as introspected. `Some` replaces the metadata as a
    /// whole, `None` keeps whatever is already there.
    pub fn set_introspected(&mut self, metadata: Option<Metadata>) -> &mut Self {
        self.introspected = true;
        if let Some(metadata) = metadata {
            self.metadata = metadata;
        }
        self
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Adds `links`, plus `metadata` once introspected, to a concrete
    /// entity's map.
    pub fn extend_map(&self, map: &mut EntityMap) {
        map.insert(
            "links".to_string(),
            Value::Array(self.links.iter().cloned().map(Value::String).collect()),
        );
        if self.introspected {
            let metadata = self
                .metadata
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect();
            map.insert("metadata".to_string(), Value::Object(metadata));
        }
    }
}

/// Map holding only the `type` entry every entity contributes.
pub fn base_map(type_tag: &str) -> EntityMap {
    let mut map = EntityMap::new();
    map.insert("type".to_string(), Value::String(type_tag.to_string()));
    map
}

/// Contract shared by the base entity and every concrete kind.
///
/// Implementors provide access to their embedded [`MusicalEntity`]; the link
/// and introspection operations are provided on top of it.
pub trait MusicalEntityInterface {
    fn entity_type(&self) -> &'static str;

    fn entity(&self) -> &MusicalEntity;

    fn entity_mut(&mut self) -> &mut MusicalEntity;

    fn to_map(&self) -> EntityMap {
        base_map(self.entity_type())
    }

    /// Short human readable label used in logs and error messages.
    fn label(&self) -> String {
        self.entity_type().to_string()
    }

    fn add_link(&mut self, link: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.entity_mut().add_link(link);
        self
    }

    fn add_links<I, S>(&mut self, links: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_mut().add_links(links);
        self
    }

    fn links(&self) -> &[String] {
        self.entity().links()
    }

    fn count_links(&self) -> usize {
        self.entity().count_links()
    }

    fn is_introspected(&self) -> bool {
        self.entity().is_introspected()
    }

    fn set_introspected(&mut self, metadata: Option<Metadata>) -> &mut Self
    where
        Self: Sized,
    {
        self.entity_mut().set_introspected(metadata);
        self
    }

    fn metadata(&self) -> &Metadata {
        self.entity().metadata()
    }
}

impl MusicalEntityInterface for MusicalEntity {
    fn entity_type(&self) -> &'static str {
        Self::TYPE
    }

    fn entity(&self) -> &MusicalEntity {
        self
    }

    fn entity_mut(&mut self) -> &mut MusicalEntity {
        self
    }
}
