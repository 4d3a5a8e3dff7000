//! Database schema and connection management

use crate::config::DatabaseLocation;
use crate::error::{DbError, Result};
use crate::query::Ident;
use rusqlite::Connection;
use tracing::{debug, info};

pub const TEAMS: Ident = Ident::from_static("teams");
pub const PLAYERS: Ident = Ident::from_static("players");
pub const MATCHES: Ident = Ident::from_static("matches");

/// Every table created by [`Database::initialize_schema`], parents first.
pub const TABLES: [Ident; 3] = [TEAMS, PLAYERS, MATCHES];

const CREATE_TEAMS: &str = "CREATE TABLE IF NOT EXISTS teams (
    id INTEGER PRIMARY KEY,
    nationality VARCHAR(250) NOT NULL,
    team_group VARCHAR(250) NOT NULL
)";

const CREATE_PLAYERS: &str = "CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY,
    team_id INTEGER NOT NULL,
    number INTEGER NOT NULL,
    name VARCHAR(250) NOT NULL,
    surname VARCHAR(250) NOT NULL,
    position VARCHAR(250) NOT NULL,
    FOREIGN KEY (team_id) REFERENCES teams (id)
)";

const CREATE_MATCHES: &str = "CREATE TABLE IF NOT EXISTS matches (
    id INTEGER PRIMARY KEY,
    team_A_id INTEGER NOT NULL,
    team_B_id INTEGER NOT NULL,
    date TEXT NOT NULL,
    status VARCHAR(250) NOT NULL,
    FOREIGN KEY (team_A_id) REFERENCES teams (id),
    FOREIGN KEY (team_B_id) REFERENCES teams (id)
)";

/// Look up a schema table by name.
///
/// Used wherever a table name comes from outside the program.
pub fn known_table(name: &str) -> Result<Ident> {
    TABLES
        .iter()
        .find(|table| table.as_str() == name)
        .cloned()
        .ok_or_else(|| DbError::UnknownTable {
            name: name.to_string(),
        })
}

/// One open database session.
///
/// The session is released when the value is dropped, on every exit path;
/// [`Database::close`] does the same but reports errors from the engine.
/// A `Database` is meant for a single owner: reads borrow it shared, writes
/// borrow it exclusively.
pub struct Database {
    pub(crate) conn: Connection,
    label: String,
}

impl Database {
    /// Open (creating if needed) the database at `location`.
    pub fn open(location: &DatabaseLocation) -> Result<Self> {
        let conn = match location {
            DatabaseLocation::InMemory => Connection::open_in_memory(),
            DatabaseLocation::File(path) => {
                // Ensure the parent directory exists
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                Connection::open(path)
            }
        }
        .map_err(|source| DbError::Connection {
            path: location.to_string(),
            source,
        })?;

        Self::from_connection(conn, location.to_string())
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(&DatabaseLocation::InMemory)
    }

    fn from_connection(conn: Connection, label: String) -> Result<Self> {
        info!(
            database = %label,
            sqlite_version = rusqlite::version(),
            "Connected"
        );
        Ok(Self { conn, label })
    }

    /// Open a database and make sure all tables exist.
    pub fn open_with_schema(location: &DatabaseLocation) -> Result<Self> {
        let mut db = Self::open(location)?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create the `teams`, `players` and `matches` tables if missing.
    pub fn initialize_schema(&mut self) -> Result<()> {
        for sql in [CREATE_TEAMS, CREATE_PLAYERS, CREATE_MATCHES] {
            self.conn
                .execute(sql, [])
                .map_err(|source| DbError::statement(sql, source))?;
        }
        info!(database = %self.label, "Schema ready");
        Ok(())
    }

    /// Where this database lives, as given when it was opened.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Close the session, surfacing any error the engine reports.
    pub fn close(self) -> Result<()> {
        let label = self.label;
        self.conn.close().map_err(|(_, source)| DbError::Connection {
            path: label.clone(),
            source,
        })?;
        debug!(database = %label, "Closed");
        Ok(())
    }
}
