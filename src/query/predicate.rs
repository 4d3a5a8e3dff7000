//! Turns an [`Attributes`] mapping into `column = ?` fragments and the
//! matching positional parameters.

use super::{Attributes, Value};

/// How fragments are combined into one clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    /// `WHERE a = ? AND b = ?`
    And,
    /// `SET a = ?, b = ?`
    Comma,
}

impl Connective {
    fn separator(self) -> &'static str {
        match self {
            Connective::And => " AND ",
            Connective::Comma => ", ",
        }
    }
}

/// Fragments and parameters built from one mapping.
///
/// `fragments[i]` names the column whose value is `params[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragments {
    fragments: Vec<String>,
    params: Vec<Value>,
}

impl Fragments {
    /// Build one `column = ?` fragment per entry, in mapping order.
    ///
    /// An empty mapping yields no fragments; callers decide whether that is
    /// acceptable.
    pub fn build(attrs: &Attributes) -> Self {
        let (fragments, params) = attrs
            .iter()
            .map(|(column, value)| (format!("{} = ?", column), value.clone()))
            .unzip();
        Self { fragments, params }
    }

    pub fn join(&self, connective: Connective) -> String {
        self.fragments.join(connective.separator())
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_params(self) -> Vec<Value> {
        self.params
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
