//! Generic CRUD operations

use super::{executor, row::Row, schema::Database};
use crate::error::Result;
use crate::query::{Attributes, Ident, RowId, Statement};
use tracing::warn;

impl Database {
    /// Every row of `table`.
    pub fn select_all(&self, table: &Ident) -> Result<Vec<Row>> {
        executor::fetch_all(&self.conn, &Statement::select_all(table))
    }

    /// Rows of `table` whose columns equal all values in `predicate`.
    ///
    /// An empty predicate is rejected with
    /// [`DbError::EmptyPredicate`](crate::DbError::EmptyPredicate); use
    /// [`select_all`](Self::select_all) to read the whole table.
    pub fn select_where(&self, table: &Ident, predicate: &Attributes) -> Result<Vec<Row>> {
        executor::fetch_all(&self.conn, &Statement::select_where(table, predicate)?)
    }

    /// Insert one row and return its id.
    pub fn insert(&mut self, table: &Ident, values: &Attributes) -> Result<RowId> {
        executor::insert(&mut self.conn, &Statement::insert(table, values)?)
    }

    /// Set the columns in `assignments` on the row with `id`.
    ///
    /// Returns the number of rows changed: 1, or 0 when no row has that id.
    pub fn update(&mut self, table: &Ident, id: RowId, assignments: &Attributes) -> Result<usize> {
        executor::execute(&mut self.conn, &Statement::update(table, id, assignments)?)
    }

    /// Delete the rows of `table` matching every value in `predicate`.
    ///
    /// An empty predicate is rejected; use [`delete_all`](Self::delete_all)
    /// to empty a table.
    pub fn delete_where(&mut self, table: &Ident, predicate: &Attributes) -> Result<usize> {
        executor::execute(&mut self.conn, &Statement::delete_where(table, predicate)?)
    }

    /// Delete every row of `table`.
    pub fn delete_all(&mut self, table: &Ident) -> Result<usize> {
        let deleted = executor::execute(&mut self.conn, &Statement::delete_all(table))?;
        warn!(table = %table, deleted, "Deleted all rows");
        Ok(deleted)
    }
}
