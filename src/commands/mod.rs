//! Command implementations for the football-db CLI

pub mod common;
pub mod crud;
pub mod setup;

use crate::{
    cli::{Commands, FootballDb},
    Result,
};

/// Dispatch a parsed command line to its handler
pub fn run(app: FootballDb) -> Result<()> {
    let opts = &app.global;
    match app.command {
        Commands::Init => setup::handle_init(opts),
        Commands::Seed { fresh } => setup::handle_seed(opts, fresh),
        Commands::Demo => setup::handle_demo(opts),
        Commands::Select { table, filters } => crud::handle_select(opts, &table, &filters),
        Commands::Insert { table, values } => crud::handle_insert(opts, &table, &values),
        Commands::Update {
            table,
            id,
            assignments,
        } => crud::handle_update(opts, &table, id, &assignments),
        Commands::Delete {
            table,
            filters,
            all,
        } => crud::handle_delete(opts, &table, &filters, all),
    }
}
