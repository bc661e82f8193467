use serde::{Deserialize, Serialize};

use crate::csv::{parse_count, parse_flag, parse_table, Record};
use crate::error::{DatasetKind, LoadError};

pub const COMP_ID: &str = "comp_id";
pub const COMP_DATE: &str = "comp_date";
pub const BOULDER_ID: &str = "boulder_id";
pub const CLIMBER_ID: &str = "climber_id";
pub const ATTEMPTS_TO_ZONE: &str = "attempts_to_zone";
pub const ATTEMPTS_TO_TOP: &str = "attempts_to_top";
pub const ZONE_COMPLETED: &str = "zone_completed";
pub const TOP_COMPLETED: &str = "top_completed";

/// Columns the results table must carry.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COMP_ID,
    COMP_DATE,
    BOULDER_ID,
    CLIMBER_ID,
    ATTEMPTS_TO_ZONE,
    ATTEMPTS_TO_TOP,
    ZONE_COMPLETED,
    TOP_COMPLETED,
];

/// One climber's outcome on one boulder in one competition.
///
/// Repeated (climber, comp, boulder) rows are all kept and summed
/// downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub comp_id: String,
    pub comp_date: String,
    pub boulder_id: String,
    pub climber_id: String,
    pub attempts_to_zone: u32,
    pub attempts_to_top: u32,
    pub zone_completed: bool,
    pub top_completed: bool,
}

impl ResultEntry {
    /// Parse the results table, failing if a required column is missing.
    pub fn parse_all(text: &str) -> Result<Vec<ResultEntry>, LoadError> {
        let table = parse_table(text);
        table.require(DatasetKind::Results, &REQUIRED_COLUMNS)?;
        Ok(table.records().map(|r| ResultEntry::from_record(&r)).collect())
    }

    fn from_record(record: &Record<'_>) -> Self {
        let row = record.row_number();
        Self {
            comp_id: record.get(COMP_ID).to_string(),
            comp_date: record.get(COMP_DATE).to_string(),
            boulder_id: record.get(BOULDER_ID).to_string(),
            climber_id: record.get(CLIMBER_ID).to_string(),
            attempts_to_zone: parse_count(record.get(ATTEMPTS_TO_ZONE), ATTEMPTS_TO_ZONE, row),
            attempts_to_top: parse_count(record.get(ATTEMPTS_TO_TOP), ATTEMPTS_TO_TOP, row),
            zone_completed: parse_flag(record.get(ZONE_COMPLETED)),
            top_completed: parse_flag(record.get(TOP_COMPLETED)),
        }
    }

    /// Attempts counted against the climber for this row.
    pub fn attempts(&self) -> u32 {
        self.attempts_to_zone.saturating_add(self.attempts_to_top)
    }

    /// Topped on the first attempt.
    pub fn is_flash(&self) -> bool {
        self.top_completed && self.attempts_to_top == 1
    }

    /// Reached the zone but did not top.
    pub fn is_zone_only(&self) -> bool {
        self.zone_completed && !self.top_completed
    }
}
