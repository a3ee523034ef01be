//! Authentication route handlers
//!
//! - `POST /users` registers a user and returns its first token
//! - `POST /login` exchanges credentials for a token
//! - `GET /users/me` returns the caller's record

pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::me;
pub use register::register;
