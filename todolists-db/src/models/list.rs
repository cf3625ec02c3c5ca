//! List name validation

use super::ValidationError;

/// Maximum length for list names
const MAX_LIST_NAME_LEN: usize = 100;

/// Validated list name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListName(String);

impl ListName {
    /// Create a new list name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 100 characters
    ///
    /// # Example
    /// ```
    /// use todolists_db::models::ListName;
    ///
    /// assert!(ListName::new("Groceries").is_ok());
    /// assert!(ListName::new("").is_err());
    /// assert!(ListName::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "list name" });
        }

        if trimmed.len() > MAX_LIST_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "list name",
                max: MAX_LIST_NAME_LEN,
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

impl AsRef<str> for ListName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(ListName::new("Groceries").is_ok());
        assert!(ListName::new("a").is_ok());
        assert!(ListName::new("  Trimmed  ").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            ListName::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(matches!(
            ListName::new("   ").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn max_length() {
        let name_100 = "a".repeat(100);
        assert!(ListName::new(&name_100).is_ok());

        let name_101 = "a".repeat(101);
        let err = ListName::new(&name_101).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }

    #[test]
    fn trims_whitespace() {
        let name = ListName::new("  Groceries  ").unwrap();
        assert_eq!(name.as_str(), "Groceries");
    }
}
