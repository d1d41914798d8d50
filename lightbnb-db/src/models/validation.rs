//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric field is below its minimum
    Negative { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject empty and overlong strings.
pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 255 characters"
        );

        let err = ValidationError::Negative {
            field: "cost_per_night",
        };
        assert_eq!(err.to_string(), "cost_per_night cannot be negative");
    }

    #[test]
    fn require_text_rules() {
        assert!(require_text("name", "Ada", 10).is_ok());
        assert_eq!(
            require_text("name", "   ", 10),
            Err(ValidationError::Empty { field: "name" })
        );
        assert_eq!(
            require_text("name", "abcdefghijk", 10),
            Err(ValidationError::TooLong {
                field: "name",
                max: 10
            })
        );
    }
}
