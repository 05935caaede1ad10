//! Repository implementations for database access

pub mod items;

pub use items::{Item, ItemRepo, NewItem};
