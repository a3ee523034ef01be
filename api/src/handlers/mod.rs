pub mod error;

pub use error::{handle_domain_error, json_error_handler, method_not_allowed, not_found, query_error_handler};
