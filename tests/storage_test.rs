//! Integration tests for the storage layer

use football_db::{
    query::{Attributes, Ident, RowId, Value},
    storage::{seed::seed_sample_data, Database, Player, Row, Team, MATCHES, PLAYERS, TEAMS},
    DatabaseLocation, DbError,
};

fn create_test_db() -> Database {
    let mut db = Database::open_in_memory().unwrap();
    db.initialize_schema().unwrap();
    db
}

#[test]
fn test_reference_scenario() {
    let mut db = create_test_db();

    let team_id = db
        .insert(
            &TEAMS,
            &Attributes::new()
                .with("nationality", "POLSKA")
                .with("team_group", "C"),
        )
        .unwrap();
    assert_eq!(team_id, RowId::new(1));

    let player_id = db
        .insert(
            &PLAYERS,
            &Attributes::new()
                .with("team_id", 1)
                .with("number", 9)
                .with("name", "Robert")
                .with("surname", "Lewandowski")
                .with("position", "Napastnik"),
        )
        .unwrap();
    assert_eq!(player_id, RowId::new(1));

    db.update(&PLAYERS, RowId::new(1), &Attributes::new().with("name", "Artur"))
        .unwrap();

    let rows = db
        .select_where(&PLAYERS, &Attributes::new().with("id", 1))
        .unwrap();
    assert_eq!(
        rows,
        vec![Row::new(vec![
            Value::Integer(1),
            Value::Integer(1),
            Value::Integer(9),
            Value::from("Artur"),
            Value::from("Lewandowski"),
            Value::from("Napastnik"),
        ])]
    );
}

#[test]
fn test_round_trip_preserves_types() {
    let mut db = create_test_db();
    let team = Team::new("ARGENTYNA", "C");
    let id = db.add_team(&team).unwrap();

    let rows = db
        .select_where(&TEAMS, &Attributes::new().with("id", id))
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].values(),
        &[
            Value::Integer(id.as_i64()),
            Value::from("ARGENTYNA"),
            Value::from("C")
        ]
    );
}

#[test]
fn test_insert_ids_increase() {
    let mut db = create_test_db();
    let first = db.add_team(&Team::new("POLSKA", "C")).unwrap();
    let second = db.add_team(&Team::new("MEKSYK", "C")).unwrap();
    assert!(second > first);
}

#[test]
fn test_update_only_touches_target_row() {
    let mut db = create_test_db();
    let report = seed_sample_data(&mut db).unwrap();
    let before = db.select_all(&PLAYERS).unwrap();

    let target = report.player_ids[3];
    db.update(&PLAYERS, target, &Attributes::new().with("number", 1))
        .unwrap();

    let after = db.select_all(&PLAYERS).unwrap();
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(&after) {
        if new.id() == Some(target) {
            let (_, old_player) = Player::from_row(old).unwrap();
            let (_, new_player) = Player::from_row(new).unwrap();
            assert_eq!(new_player, Player { number: 1, ..old_player });
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_delete_where_and_delete_all() {
    let mut db = create_test_db();
    let report = seed_sample_data(&mut db).unwrap();

    let predicate = Attributes::new()
        .with("team_A_id", report.team_ids[0])
        .with("team_B_id", report.team_ids[2]);
    assert_eq!(db.delete_where(&MATCHES, &predicate).unwrap(), 1);
    assert!(db.select_where(&MATCHES, &predicate).unwrap().is_empty());
    assert_eq!(db.select_all(&MATCHES).unwrap().len(), 2);

    db.delete_all(&MATCHES).unwrap();
    db.delete_all(&PLAYERS).unwrap();
    db.delete_all(&TEAMS).unwrap();
    assert!(db.select_all(&TEAMS).unwrap().is_empty());
}

#[test]
fn test_empty_predicate_is_rejected() {
    let mut db = create_test_db();
    seed_sample_data(&mut db).unwrap();

    assert!(matches!(
        db.select_where(&PLAYERS, &Attributes::new()),
        Err(DbError::EmptyPredicate { .. })
    ));
    assert!(matches!(
        db.delete_where(&PLAYERS, &Attributes::new()),
        Err(DbError::EmptyPredicate { .. })
    ));
    assert_eq!(db.select_all(&PLAYERS).unwrap().len(), 22);
}

#[test]
fn test_unknown_table_is_statement_error() {
    let db = create_test_db();
    let result = db.select_all(&Ident::from_static("referees"));
    match result {
        Err(DbError::Statement { sql, .. }) => assert_eq!(sql, "SELECT * FROM referees"),
        other => panic!("Expected Statement error, got {other:?}"),
    }
}

#[test]
fn test_writes_are_committed_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let location = DatabaseLocation::File(dir.path().join("database.db"));

    {
        let mut db = Database::open_with_schema(&location).unwrap();
        seed_sample_data(&mut db).unwrap();
        db.update(&MATCHES, RowId::new(1), &Attributes::new().with("status", "Nieodbyty"))
            .unwrap();
        // Dropped without an explicit close
    }

    let db = Database::open_with_schema(&location).unwrap();
    assert_eq!(db.select_all(&TEAMS).unwrap().len(), 4);
    let played = db
        .select_where(&MATCHES, &Attributes::new().with("status", "Odbyty"))
        .unwrap();
    assert!(played.is_empty());
    db.close().unwrap();
}

#[test]
fn test_open_fails_for_unopenable_path() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file
    let location = DatabaseLocation::File(dir.path().to_path_buf());
    match Database::open(&location) {
        Err(DbError::Connection { path, .. }) => assert_eq!(path, location.to_string()),
        Err(other) => panic!("Expected Connection error, got {other:?}"),
        Ok(_) => panic!("Expected Connection error, got an open database"),
    }
}
