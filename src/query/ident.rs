//! SQL identifiers (table and column names).
//!
//! SQLite only binds *values* as parameters, so table and column names are
//! interpolated into statement text verbatim. [`Ident`] keeps them apart from
//! [`Value`](super::Value) at the type level: an identifier can only be made
//! from a `'static` string, through [`Ident::trusted`], or through the
//! validating [`Ident::parse`].

use crate::error::{DbError, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A table or column name that is written into SQL text as-is.
///
/// The query layer does not quote or sanitize identifiers. Never build one
/// from unvalidated external input with [`Ident::trusted`]; use
/// [`Ident::parse`] for that.
///
/// # Examples
///
/// ```rust
/// use football_db::query::Ident;
///
/// let table = Ident::from_static("players");
/// assert_eq!(table.as_str(), "players");
///
/// assert!(Ident::parse("name").is_ok());
/// assert!(Ident::parse("name; DROP TABLE teams").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ident(Cow<'static, str>);

impl Ident {
    /// Identifier known at compile time.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Identifier built at runtime that the caller vouches for.
    pub fn trusted(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Validate a plain identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn parse(name: &str) -> Result<Self> {
        let mut chars = name.chars();
        let valid_head = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
        if valid_head && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Ok(Self::trusted(name))
        } else {
            Err(DbError::InvalidIdentifier {
                name: name.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Ident {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
