//! Data models for the football schema

use super::{
    row::Row,
    schema::{Database, MATCHES, PLAYERS, TEAMS},
};
use crate::error::{DbError, Result};
use crate::query::{Attributes, RowId, Value};
use serde::{Deserialize, Serialize};

/// A national team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub nationality: String,
    pub team_group: String,
}

/// A player in a team's squad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub team_id: RowId,
    pub number: i64,
    pub name: String,
    pub surname: String,
    pub position: String,
}

/// A scheduled or played match between two teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub team_a_id: RowId,
    pub team_b_id: RowId,
    pub date: String,
    pub status: String,
}

impl Team {
    pub fn new(nationality: &str, team_group: &str) -> Self {
        Self {
            nationality: nationality.to_string(),
            team_group: team_group.to_string(),
        }
    }

    pub fn attributes(&self) -> Attributes {
        Attributes::new()
            .with("nationality", self.nationality.as_str())
            .with("team_group", self.team_group.as_str())
    }

    /// Decode a `teams` row: `(id, nationality, team_group)`.
    pub fn from_row(row: &Row) -> Result<(RowId, Self)> {
        let mut cols = Columns::new(row, "team", 3)?;
        Ok((
            cols.id()?,
            Self {
                nationality: cols.text()?,
                team_group: cols.text()?,
            },
        ))
    }
}

impl Player {
    pub fn attributes(&self) -> Attributes {
        Attributes::new()
            .with("team_id", self.team_id)
            .with("number", self.number)
            .with("name", self.name.as_str())
            .with("surname", self.surname.as_str())
            .with("position", self.position.as_str())
    }

    /// Decode a `players` row: `(id, team_id, number, name, surname, position)`.
    pub fn from_row(row: &Row) -> Result<(RowId, Self)> {
        let mut cols = Columns::new(row, "player", 6)?;
        Ok((
            cols.id()?,
            Self {
                team_id: cols.id()?,
                number: cols.integer()?,
                name: cols.text()?,
                surname: cols.text()?,
                position: cols.text()?,
            },
        ))
    }
}

impl Match {
    pub fn attributes(&self) -> Attributes {
        Attributes::new()
            .with("team_A_id", self.team_a_id)
            .with("team_B_id", self.team_b_id)
            .with("date", self.date.as_str())
            .with("status", self.status.as_str())
    }

    /// Decode a `matches` row: `(id, team_A_id, team_B_id, date, status)`.
    pub fn from_row(row: &Row) -> Result<(RowId, Self)> {
        let mut cols = Columns::new(row, "match", 5)?;
        Ok((
            cols.id()?,
            Self {
                team_a_id: cols.id()?,
                team_b_id: cols.id()?,
                date: cols.text()?,
                status: cols.text()?,
            },
        ))
    }
}

impl Database {
    pub fn add_team(&mut self, team: &Team) -> Result<RowId> {
        self.insert(&TEAMS, &team.attributes())
    }

    pub fn add_player(&mut self, player: &Player) -> Result<RowId> {
        self.insert(&PLAYERS, &player.attributes())
    }

    pub fn add_match(&mut self, game: &Match) -> Result<RowId> {
        self.insert(&MATCHES, &game.attributes())
    }
}

/// Sequential typed reads over a row of known width.
struct Columns<'a> {
    values: std::slice::Iter<'a, Value>,
    entity: &'static str,
    expected: usize,
    found: usize,
}

impl<'a> Columns<'a> {
    fn new(row: &'a Row, entity: &'static str, expected: usize) -> Result<Self> {
        let cols = Self {
            values: row.values().iter(),
            entity,
            expected,
            found: row.len(),
        };
        if row.len() == expected {
            Ok(cols)
        } else {
            Err(cols.shape_error())
        }
    }

    fn shape_error(&self) -> DbError {
        DbError::RowShape {
            entity: self.entity,
            expected: self.expected,
            found: self.found,
        }
    }

    fn integer(&mut self) -> Result<i64> {
        match self.values.next() {
            Some(Value::Integer(i)) => Ok(*i),
            _ => Err(self.shape_error()),
        }
    }

    fn id(&mut self) -> Result<RowId> {
        self.integer().map(RowId::new)
    }

    fn text(&mut self) -> Result<String> {
        match self.values.next() {
            Some(Value::Text(s)) => Ok(s.clone()),
            _ => Err(self.shape_error()),
        }
    }
}
