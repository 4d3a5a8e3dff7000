//! Scalar values bound as statement parameters and returned in rows.

use crate::error::{DbError, Result};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, Null, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single SQLite scalar.
///
/// Values are passed through to the engine opaquely; the query layer never
/// inspects or coerces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Parse a command-line value.
///
/// `null` (any case) is NULL, integers and reals parse as numbers, text in
/// single quotes is taken literally (`'9'` stays text), anything else is text.
impl FromStr for Value {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("null") {
            return Ok(Value::Null);
        }
        if let Some(quoted) = s
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
        {
            return Ok(Value::Text(quoted.to_string()));
        }
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Value::Integer(i));
        }
        if let Ok(r) = s.parse::<f64>() {
            if r.is_finite() {
                return Ok(Value::Real(r));
            }
        }
        Ok(Value::Text(s.to_string()))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::from(Null),
            Value::Integer(i) => ToSqlOutput::from(*i),
            Value::Real(r) => ToSqlOutput::from(*r),
            Value::Text(s) => ToSqlOutput::from(s.as_str()),
        })
    }
}

impl FromSql for Value {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Value::Null),
            ValueRef::Integer(i) => Ok(Value::Integer(i)),
            ValueRef::Real(r) => Ok(Value::Real(r)),
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .map(|s| Value::Text(s.to_string()))
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<RowId> for Value {
    fn from(id: RowId) -> Self {
        Value::Integer(id.as_i64())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Type-safe wrapper for SQLite row ids (`INTEGER PRIMARY KEY` columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub i64);

impl RowId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RowId {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse().map(Self).map_err(|e: std::num::ParseIntError| DbError::InvalidArgument {
            input: s.to_string(),
            reason: e.to_string(),
        })
    }
}
