//! Argument types for the command line.

use crate::error::{DbError, Result};
use crate::query::{Attributes, Ident, Value};
use std::fmt;
use std::str::FromStr;

/// A `COLUMN=VALUE` argument.
///
/// The column must be a plain identifier; the value is parsed with
/// [`Value::from_str`] (`null`, integer, real, `'quoted text'` or bare text).
///
/// # Examples
///
/// ```rust
/// use football_db::cli::types::ColumnValue;
/// use football_db::query::Value;
///
/// let arg: ColumnValue = "number=9".parse().unwrap();
/// assert_eq!(arg.column.as_str(), "number");
/// assert_eq!(arg.value, Value::Integer(9));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValue {
    pub column: Ident,
    pub value: Value,
}

impl FromStr for ColumnValue {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self> {
        let (column, value) = s.split_once('=').ok_or_else(|| DbError::InvalidArgument {
            input: s.to_string(),
            reason: "expected COLUMN=VALUE".to_string(),
        })?;
        Ok(Self {
            column: Ident::parse(column.trim())?,
            value: value.trim().parse()?,
        })
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.value)
    }
}

/// Collect arguments into an ordered mapping; a repeated column keeps the
/// last value given.
pub fn to_attributes(args: &[ColumnValue]) -> Attributes {
    args.iter()
        .map(|arg| (arg.column.clone(), arg.value.clone()))
        .collect()
}
