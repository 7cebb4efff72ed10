use crate::domain::entity::Metadata;
use crate::domain::model::Entity;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn catalog_name(&self) -> &str;
    fn introspection_enabled(&self) -> bool;
    fn force_introspection(&self) -> bool;
    fn fail_fast(&self) -> bool;
}

/// Looks up descriptive metadata for an entity.
///
/// `Ok(None)` means the lookup ran but found nothing to attach.
#[async_trait]
pub trait Introspector: Send + Sync {
    async fn introspect(&self, entity: &Entity) -> Result<Option<Metadata>>;
}
