//! Rows returned by reads.

use crate::query::{RowId, Value};
use serde::Serialize;
use std::fmt;

/// One result row: values in table-declared column order, no column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(Vec<Value>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// The first column read as a row id, which is how every schema table
    /// declares its key.
    pub fn id(&self) -> Option<RowId> {
        self.get(0).and_then(Value::as_i64).map(RowId::new)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn into_values(self) -> Vec<Value> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl PartialEq<Vec<Value>> for Row {
    fn eq(&self, other: &Vec<Value>) -> bool {
        &self.0 == other
    }
}

/// `(1, "POLSKA", "C")`
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let row = Row::new(vec![
            Value::Integer(1),
            Value::from("POLSKA"),
            Value::from("C"),
        ]);
        assert_eq!(row.to_string(), r#"(1, "POLSKA", "C")"#);
    }

    #[test]
    fn test_id() {
        let row = Row::new(vec![Value::Integer(3), Value::from("MEKSYK")]);
        assert_eq!(row.id(), Some(RowId::new(3)));
        assert_eq!(Row::new(vec![Value::Null]).id(), None);
        assert_eq!(Row::new(Vec::new()).id(), None);
    }

    #[test]
    fn test_serializes_as_array() {
        let row = Row::new(vec![Value::Integer(1), Value::Null]);
        assert_eq!(serde_json::to_string(&row).unwrap(), "[1,null]");
    }
}
