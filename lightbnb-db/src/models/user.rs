//! User input validation

use once_cell::sync::Lazy;
use regex::Regex;

use super::validation::require_text;
use super::ValidationError;

/// Maximum length for names and emails (matches VARCHAR(255))
const MAX_FIELD_LEN: usize = 255;

/// One `@`, no whitespace, something on both sides, a dot in the domain.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Validated signup payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    password: String,
}

impl NewUser {
    /// Validate a new user.
    ///
    /// # Rules
    /// - name: non-empty, max 255 characters
    /// - email: `local@domain.tld` shape, max 255 characters
    /// - password: non-empty (stored as given; hash before calling)
    ///
    /// # Example
    /// ```
    /// use lightbnb_db::NewUser;
    ///
    /// assert!(NewUser::new("Ada", "ada@example.com", "hash").is_ok());
    /// assert!(NewUser::new("Ada", "not-an-email", "hash").is_err());
    /// ```
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        require_text("name", name, MAX_FIELD_LEN)?;
        require_text("email", email, MAX_FIELD_LEN)?;

        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@example.com",
            });
        }

        if password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
