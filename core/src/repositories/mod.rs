pub mod resource;
pub mod user;

pub use resource::ResourceRepository;
pub use user::{UserCredentials, UserRepository};

#[cfg(test)]
pub use resource::InMemoryRepository;
