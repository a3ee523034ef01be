//! Type definitions shared by every endpoint
//!
//! - `response` - Error and acknowledgement bodies

pub mod response;

pub use response::{ErrorResponse, StatusResponse};
