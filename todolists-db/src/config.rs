//! Connection configuration resolved by the composition root
//!
//! The repository never reads ambient environment state. The embedding
//! application resolves a [`DatabaseConfig`] here (or builds one
//! directly) and hands the resulting pool down.

use std::env;

use crate::error::{Error, Result};

/// Fixed local database used outside production.
const DEVELOPMENT_URL: &str = "postgres://localhost/todos";

/// Runtime mode selecting the connection target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    /// Read the runtime mode from `APP_ENV`.
    ///
    /// `"production"` selects production; anything else, including an
    /// unset variable, is development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(value) if value == "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
}

impl DatabaseConfig {
    /// Build a config for an explicit connection string.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Resolve the connection target for the given mode.
    ///
    /// Production connects wherever `DATABASE_URL` points and treats a
    /// missing variable as fatal; development connects to the fixed
    /// local database.
    pub fn from_env(mode: RunMode) -> Result<Self> {
        let database_url = match mode {
            RunMode::Production => env::var("DATABASE_URL").map_err(|_| {
                Error::Config("DATABASE_URL must be set in production".to_string())
            })?,
            RunMode::Development => DEVELOPMENT_URL.to_string(),
        };
        Ok(Self { database_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_uses_local_database() {
        let config = DatabaseConfig::from_env(RunMode::Development).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/todos");
    }

    #[test]
    fn production_requires_database_url() {
        env::remove_var("DATABASE_URL");
        let err = DatabaseConfig::from_env(RunMode::Production).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn explicit_url_passes_through() {
        let config = DatabaseConfig::new("postgres://db.example.com/todos");
        assert_eq!(config.database_url, "postgres://db.example.com/todos");
    }
}
