pub mod auth;
pub mod resource;

pub use auth::{LoginRequest, LoginResponse};
pub use resource::ReadQuery;
pub use rt_shared::{ErrorResponse, StatusResponse};
