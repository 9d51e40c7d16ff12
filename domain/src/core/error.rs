//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid phone number format, must be in E.164 format (e.g., +1234567890): {0}")]
    InvalidPhoneNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phone_number_display() {
        let error = DomainError::InvalidPhoneNumber("+0".to_string());
        assert!(error.to_string().starts_with("invalid phone number format"));
        assert!(error.to_string().ends_with("+0"));
    }
}
