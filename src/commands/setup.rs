//! Schema bootstrap, sample data and the demo walkthrough

use super::common::CommandContext;
use crate::{
    cli::GlobalOpts,
    query::Attributes,
    storage::{
        seed::{clear_all_data, seed_sample_data, SeedReport, NOT_PLAYED, PLAYED},
        Database, Row, MATCHES, PLAYERS,
    },
    Result,
};

/// Handle the init command
pub fn handle_init(opts: &GlobalOpts) -> Result<()> {
    // Opening the context creates any missing tables
    let ctx = CommandContext::new(opts)?;
    println!("✓ Schema ready in {}", ctx.db.label());
    ctx.finish()
}

/// Handle the seed command
pub fn handle_seed(opts: &GlobalOpts, fresh: bool) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    if fresh {
        println!("Clearing existing data...");
        clear_all_data(&mut ctx.db)?;
    }

    let report = seed_sample_data(&mut ctx.db)?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "✓ Seeded {} teams, {} players, {} matches",
            report.team_ids.len(),
            report.player_ids.len(),
            report.match_ids.len()
        );
    }
    ctx.finish()
}

/// What is left after [`run_demo`]
#[derive(Debug)]
pub struct DemoOutcome {
    pub report: SeedReport,
    pub matches: Vec<Row>,
    pub first_team_players: Vec<Row>,
}

/// Seed the database, then exercise update, delete and both kinds of select
/// the way the sample workflow does.
pub fn run_demo(db: &mut Database) -> Result<DemoOutcome> {
    let report = seed_sample_data(db)?;

    db.update(
        &PLAYERS,
        report.player_ids[6],
        &Attributes::new()
            .with("name", "Artur")
            .with("surname", "Jędrzejczyk"),
    )?;
    db.update(
        &MATCHES,
        report.match_ids[0],
        &Attributes::new().with("status", NOT_PLAYED),
    )?;
    db.delete_where(&MATCHES, &Attributes::new().with("status", PLAYED))?;

    let matches = db.select_all(&MATCHES)?;
    let first_team_players =
        db.select_where(&PLAYERS, &Attributes::new().with("team_id", report.team_ids[0]))?;

    Ok(DemoOutcome {
        report,
        matches,
        first_team_players,
    })
}

/// Handle the demo command
pub fn handle_demo(opts: &GlobalOpts) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let outcome = run_demo(&mut ctx.db)?;

    if !ctx.json {
        println!("Matches:");
    }
    ctx.print_rows(&outcome.matches)?;
    if !ctx.json {
        println!("Players of team {}:", outcome.report.team_ids[0]);
    }
    ctx.print_rows(&outcome.first_team_players)?;
    ctx.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Value;
    use crate::storage::{Match, Player};

    #[test]
    fn test_run_demo() {
        let mut db = Database::open_in_memory().unwrap();
        db.initialize_schema().unwrap();

        let outcome = run_demo(&mut db).unwrap();

        // The only played match was reset before the delete ran
        assert_eq!(outcome.matches.len(), 3);
        for row in &outcome.matches {
            let (_, game) = Match::from_row(row).unwrap();
            assert_eq!(game.status, NOT_PLAYED);
        }

        assert_eq!(outcome.first_team_players.len(), 11);
        let renamed = outcome
            .first_team_players
            .iter()
            .find(|row| row.id() == Some(outcome.report.player_ids[6]))
            .unwrap();
        let (_, player) = Player::from_row(renamed).unwrap();
        assert_eq!(player.name, "Artur");
        assert_eq!(player.surname, "Jędrzejczyk");
        assert_eq!(player.number, 8);
        assert_eq!(renamed.get(5), Some(&Value::from("Obrońca")));
    }
}
