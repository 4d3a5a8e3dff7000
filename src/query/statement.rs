//! Composes complete SQL statements from a table and fragments.

use super::{Attributes, Connective, Fragments, Ident, RowId, Value};
use crate::error::{DbError, Result};

/// What a statement does, which decides how it is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    /// Whether the statement changes data and must be committed.
    pub fn is_write(self) -> bool {
        !matches!(self, StatementKind::Select)
    }
}

/// SQL text paired with its positional parameters.
///
/// Built fresh for each call and consumed by the executor.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    kind: StatementKind,
    sql: String,
    params: Vec<Value>,
    placeholders: usize,
}

impl Statement {
    /// `SELECT * FROM <table>`
    pub fn select_all(table: &Ident) -> Self {
        Self {
            kind: StatementKind::Select,
            sql: format!("SELECT * FROM {}", table),
            params: Vec::new(),
            placeholders: 0,
        }
    }

    /// `SELECT * FROM <table> WHERE a = ? AND b = ?`
    pub fn select_where(table: &Ident, predicate: &Attributes) -> Result<Self> {
        let where_clause = predicate_clause(table, predicate)?;
        let sql = format!(
            "SELECT * FROM {} WHERE {}",
            table,
            where_clause.join(Connective::And)
        );
        Self::checked(StatementKind::Select, sql, where_clause.into_params())
    }

    /// `INSERT INTO <table> (a, b) VALUES (?, ?)`
    pub fn insert(table: &Ident, values: &Attributes) -> Result<Self> {
        if values.is_empty() {
            return Err(DbError::EmptyAssignment {
                table: table.to_string(),
            });
        }
        let columns: Vec<&str> = values.columns().map(Ident::as_str).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            vec!["?"; columns.len()].join(", ")
        );
        let params = values.iter().map(|(_, v)| v.clone()).collect();
        Self::checked(StatementKind::Insert, sql, params)
    }

    /// `UPDATE <table> SET a = ?, b = ? WHERE id = ?`
    ///
    /// The row id is always the last parameter.
    pub fn update(table: &Ident, id: RowId, assignments: &Attributes) -> Result<Self> {
        if assignments.is_empty() {
            return Err(DbError::EmptyAssignment {
                table: table.to_string(),
            });
        }
        let set_clause = Fragments::build(assignments);
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?",
            table,
            set_clause.join(Connective::Comma)
        );
        let mut params = set_clause.into_params();
        params.push(id.into());
        Self::checked(StatementKind::Update, sql, params)
    }

    /// `DELETE FROM <table> WHERE a = ? AND b = ?`
    pub fn delete_where(table: &Ident, predicate: &Attributes) -> Result<Self> {
        let where_clause = predicate_clause(table, predicate)?;
        let sql = format!(
            "DELETE FROM {} WHERE {}",
            table,
            where_clause.join(Connective::And)
        );
        Self::checked(StatementKind::Delete, sql, where_clause.into_params())
    }

    /// `DELETE FROM <table>`, removing every row.
    pub fn delete_all(table: &Ident) -> Self {
        Self {
            kind: StatementKind::Delete,
            sql: format!("DELETE FROM {}", table),
            params: Vec::new(),
            placeholders: 0,
        }
    }

    /// Placeholders are counted in the finished SQL text, not in the
    /// fragments it was built from.
    fn checked(kind: StatementKind, sql: String, params: Vec<Value>) -> Result<Self> {
        let placeholders = count_placeholders(&sql);
        let statement = Self {
            kind,
            sql,
            params,
            placeholders,
        };
        statement.verify()?;
        Ok(statement)
    }

    /// Check that every placeholder has exactly one parameter.
    pub fn verify(&self) -> Result<()> {
        if self.placeholders == self.params.len() {
            Ok(())
        } else {
            Err(DbError::ParameterMismatch {
                placeholders: self.placeholders,
                params: self.params.len(),
            })
        }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn placeholders(&self) -> usize {
        self.placeholders
    }
}

/// Number of positional `?` markers in `sql`.
///
/// Statements never carry string literals, so every `?` is a marker.
fn count_placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

fn predicate_clause(table: &Ident, predicate: &Attributes) -> Result<Fragments> {
    if predicate.is_empty() {
        return Err(DbError::EmptyPredicate {
            table: table.to_string(),
        });
    }
    Ok(Fragments::build(predicate))
}
