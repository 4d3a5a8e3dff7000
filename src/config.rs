//! Where the database lives.
//!
//! Resolution order: explicit path (the `--db` flag), then the
//! `FOOTBALL_DB_PATH` environment variable, then
//! `<platform data dir>/football-db/database.db`. The literal `:memory:`
//! selects a private in-memory database.

use crate::error::{DbError, Result};
use dirs::data_dir;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV_VAR: &str = "FOOTBALL_DB_PATH";
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    InMemory,
    File(PathBuf),
}

impl DatabaseLocation {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str() == IN_MEMORY {
            Self::InMemory
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Resolve the location from an optional explicit path and the environment.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self::from_path(path));
        }
        match std::env::var(DB_PATH_ENV_VAR) {
            Ok(path) if !path.is_empty() => Ok(Self::from_path(path)),
            _ => default_database_path().map(Self::File),
        }
    }
}

impl fmt::Display for DatabaseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => f.write_str(IN_MEMORY),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Default database file under the platform data directory
pub fn default_database_path() -> Result<PathBuf> {
    let data_dir = data_dir().ok_or_else(|| DbError::Config {
        message: "Could not determine data directory".to_string(),
    })?;
    Ok(data_dir.join("football-db").join("database.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_memory() {
        assert_eq!(DatabaseLocation::from_path(":memory:"), DatabaseLocation::InMemory);
        assert_eq!(
            DatabaseLocation::from_path("database.db"),
            DatabaseLocation::File(PathBuf::from("database.db"))
        );
    }

    #[test]
    fn test_resolution_order() {
        // One test touches the env var so parallel tests cannot interleave
        std::env::set_var(DB_PATH_ENV_VAR, "/tmp/from-env.db");

        let explicit = DatabaseLocation::resolve(Some(PathBuf::from("/tmp/explicit.db"))).unwrap();
        assert_eq!(explicit, DatabaseLocation::File(PathBuf::from("/tmp/explicit.db")));

        let from_env = DatabaseLocation::resolve(None).unwrap();
        assert_eq!(from_env, DatabaseLocation::File(PathBuf::from("/tmp/from-env.db")));

        std::env::set_var(DB_PATH_ENV_VAR, IN_MEMORY);
        assert_eq!(DatabaseLocation::resolve(None).unwrap(), DatabaseLocation::InMemory);

        std::env::remove_var(DB_PATH_ENV_VAR);
        if let Ok(default) = DatabaseLocation::resolve(None) {
            match default {
                DatabaseLocation::File(path) => assert!(path.ends_with("football-db/database.db")),
                DatabaseLocation::InMemory => panic!("Default location should be a file"),
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DatabaseLocation::InMemory.to_string(), ":memory:");
        assert_eq!(
            DatabaseLocation::File(PathBuf::from("a/b.db")).to_string(),
            "a/b.db"
        );
    }
}
