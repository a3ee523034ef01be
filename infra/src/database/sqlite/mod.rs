//! SQLite implementations of the core repository traits

mod entity;
mod repository;

pub use entity::{SqlEntity, SqliteQuery};
pub use repository::SqliteRepository;
