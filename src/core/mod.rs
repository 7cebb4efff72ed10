pub mod introspection;
pub mod title;

pub use crate::domain::entity::{EntityMap, Metadata, MusicalEntity, MusicalEntityInterface};
pub use crate::domain::model::Entity;
pub use crate::domain::ports::{ConfigProvider, Introspector};
pub use crate::utils::error::Result;
