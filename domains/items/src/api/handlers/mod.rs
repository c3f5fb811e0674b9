//! HTTP handlers for the Items domain

pub mod admin;
pub mod contact;
pub mod items;

pub use items::ItemResponse;
