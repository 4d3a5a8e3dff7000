//! Integration tests for statement construction

use football_db::query::{
    Attributes, Connective, Fragments, Ident, RowId, Statement, StatementKind, Value,
};

#[test]
fn test_fragment_i_matches_param_i() {
    let attrs = Attributes::new()
        .with("team_A_id", 1)
        .with("team_B_id", 3)
        .with("date", "22.11.2022, godz. 17:00")
        .with("status", Value::Null);

    let built = Fragments::build(&attrs);
    assert_eq!(built.len(), attrs.len());
    assert_eq!(built.params().len(), attrs.len());

    for ((fragment, param), (column, value)) in built
        .fragments()
        .iter()
        .zip(built.params())
        .zip(attrs.iter())
    {
        assert_eq!(fragment, &format!("{} = ?", column));
        assert_eq!(param, value);
    }
}

#[test]
fn test_update_and_select_share_fragment_order() {
    let attrs = Attributes::new().with("name", "Artur").with("number", 8);
    let table = Ident::from_static("players");

    let update = Statement::update(&table, RowId::new(7), &attrs).unwrap();
    let select = Statement::select_where(&table, &attrs).unwrap();

    assert_eq!(
        update.sql(),
        format!(
            "UPDATE players SET {} WHERE id = ?",
            Fragments::build(&attrs).join(Connective::Comma)
        )
    );
    assert_eq!(
        select.sql(),
        format!(
            "SELECT * FROM players WHERE {}",
            Fragments::build(&attrs).join(Connective::And)
        )
    );
    assert_eq!(&update.params()[..2], select.params());
    assert_eq!(update.params()[2], Value::Integer(7));
}

#[test]
fn test_statement_kinds() {
    let table = Ident::from_static("matches");
    let predicate = Attributes::new().with("status", "Odbyty");

    assert_eq!(Statement::select_all(&table).kind(), StatementKind::Select);
    assert!(!StatementKind::Select.is_write());
    assert_eq!(
        Statement::delete_where(&table, &predicate).unwrap().kind(),
        StatementKind::Delete
    );
    assert_eq!(Statement::delete_all(&table).kind(), StatementKind::Delete);
}

#[test]
fn test_identifiers_are_not_bound() {
    // Identifiers go into the text; only values become parameters
    let table = Ident::trusted("teams");
    let stmt = Statement::select_where(&table, &Attributes::new().with("nationality", "teams"))
        .unwrap();
    assert_eq!(stmt.sql(), "SELECT * FROM teams WHERE nationality = ?");
    assert_eq!(stmt.params(), &[Value::from("teams")]);
}
