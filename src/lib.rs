pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::CatalogConfig;

pub use adapters::lookup::MetadataTable;
pub use core::introspection::{IntrospectionEngine, IntrospectionReport};
pub use domain::album::AlbumEntity;
pub use domain::entity::{EntityMap, Metadata, MusicalEntity, MusicalEntityInterface};
pub use domain::model::Entity;
pub use domain::track::TrackEntity;
pub use utils::error::{CatalogError, Result};
