use serde::{Deserialize, Serialize};

use crate::csv::{parse_table, Record};
use crate::error::{DatasetKind, LoadError};

pub const TEAM_ID: &str = "team_id";
pub const TEAM_NAME: &str = "team_name";
pub const CLIMBER_ID: &str = "climber_id";
pub const CLIMBER_NAME: &str = "climber_name";
pub const DIVISION: &str = "division";

/// Columns the roster table must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [TEAM_ID, TEAM_NAME, CLIMBER_ID, CLIMBER_NAME, DIVISION];

/// One (team, climber) pairing from the roster table.
///
/// `division` is kept as written; it is matched against [`Division`] only
/// when climbers are grouped, so an unrecognized value still leaves the
/// climber on the overall and team boards.
///
/// [`Division`]: crate::models::Division
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub team_id: String,
    pub team_name: String,
    pub climber_id: String,
    pub climber_name: String,
    pub division: String,
}

impl RosterEntry {
    /// Parse the roster table, failing if a required column is missing.
    pub fn parse_all(text: &str) -> Result<Vec<RosterEntry>, LoadError> {
        let table = parse_table(text);
        table.require(DatasetKind::Roster, &REQUIRED_COLUMNS)?;
        Ok(table.records().map(|r| RosterEntry::from_record(&r)).collect())
    }

    fn from_record(record: &Record<'_>) -> Self {
        Self {
            team_id: record.get(TEAM_ID).to_string(),
            team_name: record.get(TEAM_NAME).to_string(),
            climber_id: record.get(CLIMBER_ID).to_string(),
            climber_name: record.get(CLIMBER_NAME).to_string(),
            division: record.get(DIVISION).to_string(),
        }
    }
}
