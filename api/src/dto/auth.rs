use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use rt_core::errors::ValidationError;

/// Credentials for `POST /login`
///
/// Only presence is checked here. A malformed email cannot belong to a
/// registered user, so it fails the lookup like any unknown email.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginRequest {
    /// Collapse validator output into the first caller-facing error
    pub fn validation_error(&self, errors: &ValidationErrors) -> ValidationError {
        if errors.field_errors().contains_key("email") {
            ValidationError::empty("email")
        } else {
            ValidationError::empty("password")
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("pat@example.com", "hunter2").validate().is_ok());
    }

    #[test]
    fn test_email_format_is_left_to_lookup() {
        assert!(request("landlord", "hunter2").validate().is_ok());
    }

    #[test]
    fn test_validation_error_mapping() {
        let empty_email = request("", "hunter2");
        let errors = empty_email.validate().unwrap_err();
        assert_eq!(empty_email.validation_error(&errors), ValidationError::empty("email"));

        let empty_password = request("pat@example.com", "");
        let errors = empty_password.validate().unwrap_err();
        assert_eq!(
            empty_password.validation_error(&errors),
            ValidationError::empty("password")
        );
    }
}
