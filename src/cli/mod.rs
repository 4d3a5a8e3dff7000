//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::ColumnValue;

use crate::query::RowId;

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Database file, or `:memory:` (or set `FOOTBALL_DB_PATH` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output rows as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log every statement that is executed.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the teams, players and matches tables if they do not exist.
    Init,

    /// Create the schema and insert the sample group C teams, players and matches.
    Seed {
        /// Delete all matches, players and teams first.
        #[clap(long)]
        fresh: bool,
    },

    /// Seed a database, then rename a player, reset a match, delete played
    /// matches and print what is left.
    Demo,

    /// Print rows of a table. Without filters, prints every row.
    Select {
        /// Table name: teams, players or matches.
        table: String,

        /// Filter `COLUMN=VALUE` (repeatable, combined with AND): `-w team_id=1 -w number=9`.
        #[clap(long = "where", short = 'w', value_name = "COLUMN=VALUE")]
        filters: Vec<ColumnValue>,
    },

    /// Insert one row and print its id.
    Insert {
        /// Table name: teams, players or matches.
        table: String,

        /// Column value (repeatable): `-s nationality=POLSKA -s team_group=C`.
        #[clap(long = "set", short = 's', value_name = "COLUMN=VALUE", required = true)]
        values: Vec<ColumnValue>,
    },

    /// Update columns of the row with the given id.
    Update {
        /// Table name: teams, players or matches.
        table: String,

        /// Row id.
        id: RowId,

        /// Column value to assign (repeatable): `-s name=Artur`.
        #[clap(long = "set", short = 's', value_name = "COLUMN=VALUE", required = true)]
        assignments: Vec<ColumnValue>,
    },

    /// Delete the rows matching every filter, or every row with `--all`.
    Delete {
        /// Table name: teams, players or matches.
        table: String,

        /// Filter `COLUMN=VALUE` (repeatable, combined with AND).
        #[clap(long = "where", short = 'w', value_name = "COLUMN=VALUE")]
        filters: Vec<ColumnValue>,

        /// Delete every row in the table.
        #[clap(long, conflicts_with = "filters")]
        all: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "football-db",
    about = "Generic CRUD over the football SQLite database"
)]
pub struct FootballDb {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}
