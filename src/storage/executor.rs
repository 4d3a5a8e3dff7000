//! Runs composed statements against a connection.
//!
//! Reads are fetched eagerly. Writes run inside a transaction that is
//! committed before returning; if the statement or the commit fails the
//! transaction is rolled back when it is dropped.

use super::row::Row;
use crate::error::{DbError, Result};
use crate::query::{RowId, Statement, Value};
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

/// Run a SELECT and collect every row.
pub(crate) fn fetch_all(conn: &Connection, statement: &Statement) -> Result<Vec<Row>> {
    statement.verify()?;
    let sql = statement.sql();
    debug!(sql, params = statement.params().len(), "query");

    let to_error = |source| DbError::statement(sql, source);
    let mut stmt = conn.prepare(sql).map_err(to_error)?;
    let columns = stmt.column_count();

    let rows = stmt
        .query_map(params_from_iter(statement.params()), |row| {
            (0..columns)
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<_>>>()
        })
        .map_err(to_error)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(Row::new(row.map_err(to_error)?));
    }
    Ok(result)
}

/// Run an UPDATE or DELETE and commit it. Returns the number of rows changed.
pub(crate) fn execute(conn: &mut Connection, statement: &Statement) -> Result<usize> {
    let (changed, ()) = run_committed(conn, statement, |_| ())?;
    Ok(changed)
}

/// Run an INSERT and commit it. Returns the id of the new row.
pub(crate) fn insert(conn: &mut Connection, statement: &Statement) -> Result<RowId> {
    let (_, id) = run_committed(conn, statement, |tx| RowId::new(tx.last_insert_rowid()))?;
    Ok(id)
}

fn run_committed<T>(
    conn: &mut Connection,
    statement: &Statement,
    after: impl FnOnce(&rusqlite::Transaction<'_>) -> T,
) -> Result<(usize, T)> {
    statement.verify()?;
    let sql = statement.sql();
    debug!(sql, params = statement.params().len(), "execute");

    let to_error = |source| DbError::statement(sql, source);
    let tx = conn.transaction().map_err(to_error)?;
    let changed = tx
        .execute(sql, params_from_iter(statement.params()))
        .map_err(to_error)?;
    let extra = after(&tx);
    tx.commit().map_err(to_error)?;

    debug!(changed, "committed");
    Ok((changed, extra))
}
