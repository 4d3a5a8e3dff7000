//! Sample data: group C of the 2022 World Cup.

use super::{
    models::{Match, Player, Team},
    schema::{Database, MATCHES, PLAYERS, TEAMS},
};
use crate::error::Result;
use crate::query::RowId;
use serde::Serialize;
use tracing::info;

pub const GOALKEEPER: &str = "Bramkarz";
pub const DEFENDER: &str = "Obrońca";
pub const MIDFIELDER: &str = "Pomocnik";
pub const FORWARD: &str = "Napastnik";

pub const PLAYED: &str = "Odbyty";
pub const NOT_PLAYED: &str = "Nieodbyty";

const TEAMS_DATA: [(&str, &str); 4] = [
    ("POLSKA", "C"),
    ("ARABIA SAUDYJSKA", "C"),
    ("MEKSYK", "C"),
    ("ARGENTYNA", "C"),
];

/// `(team index, number, name, surname, position)`
const PLAYERS_DATA: [(usize, i64, &str, &str, &str); 22] = [
    (0, 9, "Robert", "Lewandowski", FORWARD),
    (0, 12, "Arkadiusz", "Milik", FORWARD),
    (0, 18, "Karol", "Świderski", FORWARD),
    (0, 19, "Wojciech", "Szczęsny", GOALKEEPER),
    (0, 21, "Kamil", "Glik", DEFENDER),
    (0, 23, "Jan", "Bednarek", DEFENDER),
    (0, 8, "Jakub", "Kiwior", DEFENDER),
    (0, 10, "Robert", "Gumny", DEFENDER),
    (0, 11, "Grzegorz", "Krychowiak", MIDFIELDER),
    (0, 17, "Piotr", "Zieliński", MIDFIELDER),
    (0, 13, "Kamil", "Grosicki", MIDFIELDER),
    (1, 12, "Alexis", "Vega", FORWARD),
    (1, 10, "Hirving", "Lozano", FORWARD),
    (1, 1, "Raul", "Jimenez", FORWARD),
    (1, 8, "Guillermo", "Ochoa", GOALKEEPER),
    (1, 24, "Jorge", "Sanchez", DEFENDER),
    (1, 5, "Kevin", "Alvarez", DEFENDER),
    (1, 13, "Nestor", "Araujo", DEFENDER),
    (1, 14, "Cesar", "Montez", DEFENDER),
    (1, 17, "Andres", "Guardado", MIDFIELDER),
    (1, 19, "Hector", "Herrera", MIDFIELDER),
    (1, 21, "Charly", "Rodriguez", MIDFIELDER),
];

/// `(team A index, team B index, date, status)`
const MATCHES_DATA: [(usize, usize, &str, &str); 3] = [
    (0, 2, "22.11.2022, godz. 17:00", PLAYED),
    (0, 1, "26.11.2022, godz. 14:00", NOT_PLAYED),
    (0, 3, "30.11.2022, godz. 20:00", NOT_PLAYED),
];

/// Ids assigned to the seeded rows, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeedReport {
    pub team_ids: Vec<RowId>,
    pub player_ids: Vec<RowId>,
    pub match_ids: Vec<RowId>,
}

/// Insert the sample teams, players and matches.
///
/// Rows are appended; existing data is left alone.
pub fn seed_sample_data(db: &mut Database) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for (nationality, group) in TEAMS_DATA {
        report.team_ids.push(db.add_team(&Team::new(nationality, group))?);
    }

    for (team, number, name, surname, position) in PLAYERS_DATA {
        let player = Player {
            team_id: report.team_ids[team],
            number,
            name: name.to_string(),
            surname: surname.to_string(),
            position: position.to_string(),
        };
        report.player_ids.push(db.add_player(&player)?);
    }

    for (team_a, team_b, date, status) in MATCHES_DATA {
        let game = Match {
            team_a_id: report.team_ids[team_a],
            team_b_id: report.team_ids[team_b],
            date: date.to_string(),
            status: status.to_string(),
        };
        report.match_ids.push(db.add_match(&game)?);
    }

    info!(
        teams = report.team_ids.len(),
        players = report.player_ids.len(),
        matches = report.match_ids.len(),
        "Seeded sample data"
    );
    Ok(report)
}

/// Remove all matches, players and teams, children first.
pub fn clear_all_data(db: &mut Database) -> Result<()> {
    for table in [MATCHES, PLAYERS, TEAMS] {
        db.delete_all(&table)?;
    }
    Ok(())
}
