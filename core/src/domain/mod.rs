//! Domain layer containing the entity model and the resource contract.

pub mod entities;
pub mod resource;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::*;
pub use resource::{require, Blank, Resource};
pub use value_objects::*;
