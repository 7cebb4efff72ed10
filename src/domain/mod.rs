// Domain layer: entities and ports (interfaces). No I/O here.

pub mod album;
pub mod entity;
pub mod model;
pub mod ports;
pub mod track;
