//! Error types for the hospital query domain.
//!
//! Every variant here is a client input error: the request named a bed or a
//! user field that cannot be queried. Database failures live in the
//! infrastructure crate.

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Client input errors raised while interpreting path parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The bed parameter is not an integer
    #[error("Bed parameter must be a number.")]
    BedNotANumber,

    /// The bed parameter is zero or negative
    #[error("Bed parameter must be greater than zero.")]
    BedNotPositive,

    /// The bed parameter exceeds the highest bed code
    #[error("Bed parameter must be less than 9999.")]
    BedTooLarge,

    /// The bed parameter was absent or blank
    #[error("Bed parameter is required.")]
    BedMissing,

    /// The requested user field is not on the allow-list
    #[error("Unknown user field '{0}'.")]
    UnknownUserField(String),
}

impl DomainError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BedNotANumber | Self::BedNotPositive | Self::BedTooLarge | Self::BedMissing => {
                "INVALID_BED"
            }
            Self::UnknownUserField(_) => "UNKNOWN_FIELD",
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_messages() {
        assert_eq!(
            DomainError::BedNotANumber.to_string(),
            "Bed parameter must be a number."
        );
        assert_eq!(
            DomainError::BedNotPositive.to_string(),
            "Bed parameter must be greater than zero."
        );
        assert_eq!(
            DomainError::BedTooLarge.to_string(),
            "Bed parameter must be less than 9999."
        );
    }

    #[test]
    fn test_unknown_field_message() {
        let err = DomainError::UnknownUserField("senha".to_string());
        assert_eq!(err.to_string(), "Unknown user field 'senha'.");
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
        assert_eq!(err.http_status(), 400);
    }
}
