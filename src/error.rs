//! Error types for the football database layer

use thiserror::Error;


pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Could not open database {path}: {source}")]
    Connection {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Statement failed ({sql}): {source}")]
    Statement {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Statement has {placeholders} placeholders but {params} parameters")]
    ParameterMismatch { placeholders: usize, params: usize },

    #[error("Refusing to filter {table} with an empty predicate")]
    EmptyPredicate { table: String },

    #[error("No columns given to write into {table}")]
    EmptyAssignment { table: String },

    #[error("Invalid SQL identifier: {name:?}")]
    InvalidIdentifier { name: String },

    #[error("Unknown table: {name}")]
    UnknownTable { name: String },

    #[error("Invalid argument {input:?}: {reason}")]
    InvalidArgument { input: String, reason: String },

    #[error("Row does not decode as a {entity}: expected {expected} typed columns, row has {found}")]
    RowShape {
        entity: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl DbError {
    /// Wrap an engine error raised while running `sql`.
    pub(crate) fn statement(sql: &str, source: rusqlite::Error) -> Self {
        DbError::Statement {
            sql: sql.to_string(),
            source,
        }
    }
}
