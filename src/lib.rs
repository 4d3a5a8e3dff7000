//! Football SQLite Database Library
//!
//! A small data-access layer over an embedded SQLite database holding
//! national teams, their players and the matches between them. Reads and
//! writes go through generic operations parameterized by a table name and an
//! ordered column → value mapping instead of per-entity accessors.
//!
//! ## Features
//!
//! - **Parameterized SQL**: every value is bound positionally, in mapping order
//! - **Generic CRUD**: `select_all`, `select_where`, `insert`, `update`,
//!   `delete_where`, `delete_all` for any table
//! - **Committed Writes**: each write runs in its own transaction and is
//!   rolled back if the statement or the commit fails
//! - **Fixed Schema**: `teams`, `players` and `matches`, created idempotently
//! - **Sample Data**: group C of the 2022 World Cup
//!
//! ## Quick Start
//!
//! ```rust
//! use football_db::{query::Attributes, storage::{Database, Player, Team, PLAYERS}};
//!
//! # fn example() -> football_db::Result<()> {
//! let mut db = Database::open_in_memory()?;
//! db.initialize_schema()?;
//!
//! let team_id = db.add_team(&Team::new("POLSKA", "C"))?;
//! let player_id = db.add_player(&Player {
//!     team_id,
//!     number: 9,
//!     name: "Robert".to_string(),
//!     surname: "Lewandowski".to_string(),
//!     position: "Napastnik".to_string(),
//! })?;
//!
//! db.update(&PLAYERS, player_id, &Attributes::new().with("name", "Artur"))?;
//! let rows = db.select_where(&PLAYERS, &Attributes::new().with("id", player_id))?;
//! assert_eq!(rows.len(), 1);
//!
//! db.close()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Identifiers
//!
//! Table and column names are written into SQL text verbatim, because SQLite
//! cannot bind identifiers as parameters. They are carried by
//! [`query::Ident`], separate from [`query::Value`]; only pass names known at
//! compile time or validated with [`query::Ident::parse`].
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file to avoid passing `--db` every time:
//! ```bash
//! export FOOTBALL_DB_PATH=./database.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod query;
pub mod storage;

// Re-export commonly used types
pub use config::{DatabaseLocation, DB_PATH_ENV_VAR};
pub use error::{DbError, Result};
pub use query::{Attributes, Ident, RowId, Value};
pub use storage::{Database, Row};
