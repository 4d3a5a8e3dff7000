//! Generic select / insert / update / delete commands

use super::common::{render_changed, render_inserted, CommandContext};
use crate::{
    cli::{
        types::{to_attributes, ColumnValue},
        GlobalOpts,
    },
    error::DbError,
    query::RowId,
    storage::known_table,
    Result,
};

/// Handle the select command
pub fn handle_select(opts: &GlobalOpts, table: &str, filters: &[ColumnValue]) -> Result<()> {
    let table = known_table(table)?;
    let ctx = CommandContext::new(opts)?;

    let rows = if filters.is_empty() {
        ctx.db.select_all(&table)?
    } else {
        ctx.db.select_where(&table, &to_attributes(filters))?
    };

    ctx.print_rows(&rows)?;
    ctx.finish()
}

/// Handle the insert command
pub fn handle_insert(opts: &GlobalOpts, table: &str, values: &[ColumnValue]) -> Result<()> {
    let table = known_table(table)?;
    let mut ctx = CommandContext::new(opts)?;

    let id = ctx.db.insert(&table, &to_attributes(values))?;
    println!("{}", render_inserted(table.as_str(), id, ctx.json));
    ctx.finish()
}

/// Handle the update command
pub fn handle_update(
    opts: &GlobalOpts,
    table: &str,
    id: RowId,
    assignments: &[ColumnValue],
) -> Result<()> {
    let table = known_table(table)?;
    let mut ctx = CommandContext::new(opts)?;

    let changed = ctx.db.update(&table, id, &to_attributes(assignments))?;
    if changed == 0 && !ctx.json {
        println!("⚠ No row in {} has id {}", table, id);
    }
    println!("{}", render_changed("updated", table.as_str(), changed, ctx.json));
    ctx.finish()
}

/// Handle the delete command
///
/// Deleting a whole table needs `--all`; an empty filter list is an error
/// rather than a silent match-everything.
pub fn handle_delete(
    opts: &GlobalOpts,
    table: &str,
    filters: &[ColumnValue],
    all: bool,
) -> Result<()> {
    let table = known_table(table)?;
    if !all && filters.is_empty() {
        return Err(DbError::EmptyPredicate {
            table: table.to_string(),
        });
    }
    let mut ctx = CommandContext::new(opts)?;

    let deleted = if all {
        ctx.db.delete_all(&table)?
    } else {
        ctx.db.delete_where(&table, &to_attributes(filters))?
    };
    println!("{}", render_changed("deleted", table.as_str(), deleted, ctx.json));
    ctx.finish()
}
