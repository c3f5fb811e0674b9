//! Domain layer for items: entities and the listing filter engine

pub mod entities;
pub mod filter;
