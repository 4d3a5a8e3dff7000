//! Ordered column → value mappings.

use super::{Ident, Value};

/// An ordered mapping from column name to value.
///
/// Used both as a filter (`column = value AND ...`) and as an assignment set
/// (`SET column = value, ...`). Iteration follows insertion order, and that
/// order is the order of both the SQL fragments and the bound parameters.
/// Setting a column that is already present replaces its value but keeps its
/// original position.
///
/// # Examples
///
/// ```rust
/// use football_db::query::{Attributes, Value};
///
/// let attrs = Attributes::new()
///     .with("name", "Artur")
///     .with("surname", "Jędrzejczyk");
///
/// let columns: Vec<&str> = attrs.columns().map(|c| c.as_str()).collect();
/// assert_eq!(columns, ["name", "surname"]);
/// assert_eq!(attrs.get("name"), Some(&Value::from("Artur")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(Ident, Value)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, column: impl Into<Ident>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    /// Insert or replace the value for `column`.
    pub fn set(&mut self, column: impl Into<Ident>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(c, _)| c.as_str() == column)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Ident> {
        self.entries.iter().map(|(c, _)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &Value)> {
        self.entries.iter().map(|(c, v)| (c, v))
    }
}

impl<C: Into<Ident>, V: Into<Value>> FromIterator<(C, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (column, value) in iter {
            attrs.set(column, value);
        }
        attrs
    }
}

impl<C: Into<Ident>, V: Into<Value>> Extend<(C, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (C, V)>>(&mut self, iter: I) {
        for (column, value) in iter {
            self.set(column, value);
        }
    }
}
