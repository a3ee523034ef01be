pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

#[cfg(test)]
pub mod mock;


pub use r#trait::ResourceRepository;

#[cfg(test)]
pub use mock::InMemoryRepository;
