use crate::domain::entity::{Metadata, MusicalEntityInterface};
use crate::domain::model::Entity;
use crate::domain::ports::Introspector;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// In-memory introspector keyed by link.
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    entries: HashMap<String, Metadata>,
}

impl MetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers metadata for a link, replacing any previous entry.
    pub fn insert(&mut self, link: impl Into<String>, metadata: Metadata) -> &mut Self {
        self.entries.insert(link.into(), metadata);
        self
    }

    pub fn get(&self, link: &str) -> Option<&Metadata> {
        self.entries.get(link)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Introspector for MetadataTable {
    async fn introspect(&self, entity: &Entity) -> Result<Option<Metadata>> {
        // 依連結順序，第一個命中的為準
        let found = entity.links().iter().find_map(|link| self.get(link));
        if found.is_some() {
            tracing::debug!("Metadata table hit for {}", entity.label());
        }
        Ok(found.cloned())
    }
}
