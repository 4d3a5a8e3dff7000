//! Generic query construction
//!
//! Builds parameterized SQL from a table name and ordered attribute mappings:
//! - `ident`: table/column names, kept apart from values
//! - `value`: scalars bound as parameters
//! - `attributes`: ordered column → value mappings
//! - `predicate`: `column = ?` fragments and their parameters
//! - `statement`: full SELECT / INSERT / UPDATE / DELETE statements
//!
//! Nothing here touches a connection; see [`crate::storage`] for execution.

pub mod attributes;
pub mod ident;
pub mod predicate;
pub mod statement;
pub mod value;

pub use attributes::Attributes;
pub use ident::Ident;
pub use predicate::{Connective, Fragments};
pub use statement::{Statement, StatementKind};
pub use value::{RowId, Value};
