//! Todo name validation

use super::ValidationError;

/// Maximum length for todo names
const MAX_TODO_NAME_LEN: usize = 100;

/// Validated todo name. Same rules as list names: non-empty after
/// trimming, max 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoName(String);

impl TodoName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "todo name" });
        }

        if trimmed.len() > MAX_TODO_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "todo name",
                max: MAX_TODO_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
