//! Common utilities shared across commands.

use crate::{
    cli::GlobalOpts, config::DatabaseLocation, query::RowId, storage::Database, storage::Row,
    Result,
};
use tracing::info;

/// Context containing the resources every command needs
pub struct CommandContext {
    pub db: Database,
    pub json: bool,
}

impl CommandContext {
    /// Open the configured database and make sure the schema exists
    pub fn new(opts: &GlobalOpts) -> Result<Self> {
        let location = DatabaseLocation::resolve(opts.db.clone())?;
        info!(database = %location, "Using database");
        let db = Database::open_with_schema(&location)?;
        Ok(Self {
            db,
            json: opts.json,
        })
    }

    /// Print rows as text lines or as a JSON array
    pub fn print_rows(&self, rows: &[Row]) -> Result<()> {
        println!("{}", render_rows(rows, self.json)?);
        Ok(())
    }

    /// Close the database, reporting engine errors
    pub fn finish(self) -> Result<()> {
        self.db.close()
    }
}

/// Render rows one per line (`(1, "POLSKA", "C")`), or as a JSON array of arrays.
pub fn render_rows(rows: &[Row], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(rows)?);
    }
    if rows.is_empty() {
        return Ok("(no rows)".to_string());
    }
    Ok(rows
        .iter()
        .map(Row::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Render the result of a write
pub fn render_changed(action: &str, table: &str, changed: usize, json: bool) -> String {
    if json {
        serde_json::json!({ "table": table, action: changed }).to_string()
    } else {
        format!("✓ {} {} row(s) in {}", action, changed, table)
    }
}

/// Render the id of an inserted row
pub fn render_inserted(table: &str, id: RowId, json: bool) -> String {
    if json {
        serde_json::json!({ "table": table, "id": id }).to_string()
    } else {
        format!("✓ Inserted into {} with id {}", table, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Value;

    fn sample_rows() -> Vec<Row> {
        vec![
            Row::new(vec![Value::Integer(1), Value::from("POLSKA"), Value::from("C")]),
            Row::new(vec![Value::Integer(2), Value::from("MEKSYK"), Value::Null]),
        ]
    }

    #[test]
    fn test_context_verbose_json_in_memory() {
        let opts = GlobalOpts {
            db: Some(":memory:".into()),
            json: true,
            verbose: true,
        };
        let ctx = CommandContext::new(&opts).unwrap();
        assert!(ctx.json);
        assert_eq!(ctx.db.label(), ":memory:");
        ctx.finish().unwrap();
    }

    #[test]
    fn test_render_rows_text() {
        let text = render_rows(&sample_rows(), false).unwrap();
        assert_eq!(text, "(1, \"POLSKA\", \"C\")\n(2, \"MEKSYK\", NULL)");
    }

    #[test]
    fn test_render_rows_empty() {
        assert_eq!(render_rows(&[], false).unwrap(), "(no rows)");
        assert_eq!(render_rows(&[], true).unwrap(), "[]");
    }

    #[test]
    fn test_render_rows_json() {
        let json = render_rows(&sample_rows(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::json!([[1, "POLSKA", "C"], [2, "MEKSYK", null]]));
    }

    #[test]
    fn test_render_changed() {
        assert_eq!(
            render_changed("updated", "players", 1, false),
            "✓ updated 1 row(s) in players"
        );
        let parsed: serde_json::Value =
            serde_json::from_str(&render_changed("deleted", "matches", 2, true)).unwrap();
        assert_eq!(parsed["deleted"], 2);
        assert_eq!(parsed["table"], "matches");
    }

    #[test]
    fn test_render_inserted() {
        assert_eq!(
            render_inserted("teams", RowId::new(5), false),
            "✓ Inserted into teams with id 5"
        );
        let parsed: serde_json::Value =
            serde_json::from_str(&render_inserted("teams", RowId::new(5), true)).unwrap();
        assert_eq!(parsed["id"], 5);
    }
}
