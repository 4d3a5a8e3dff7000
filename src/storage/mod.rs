//! Storage layer for the football database
//!
//! Executes the statements built in [`crate::query`] against SQLite:
//! - `schema`: Database connection and schema management
//! - `executor`: Binding, running and committing statements
//! - `row`: Rows returned by reads
//! - `queries`: Generic CRUD operations
//! - `models`: Typed teams, players and matches
//! - `seed`: Sample data

mod executor;
pub mod models;
pub mod queries;
pub mod row;
pub mod schema;
pub mod seed;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use row::Row;
pub use schema::{known_table, Database, MATCHES, PLAYERS, TABLES, TEAMS};
