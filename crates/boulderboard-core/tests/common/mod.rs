//! Shared builders for integration tests.
#![allow(dead_code)]

use boulderboard_core::{ResultEntry, RosterEntry};

pub const ROSTER_HEADER: &str = "team_id,team_name,climber_id,climber_name,division";
pub const RESULTS_HEADER: &str =
    "comp_id,comp_date,boulder_id,climber_id,attempts_to_zone,attempts_to_top,zone_completed,top_completed";

pub fn roster(team_id: &str, team_name: &str, climber_id: &str, climber_name: &str, division: &str) -> RosterEntry {
    RosterEntry {
        team_id: team_id.to_string(),
        team_name: team_name.to_string(),
        climber_id: climber_id.to_string(),
        climber_name: climber_name.to_string(),
        division: division.to_string(),
    }
}

pub fn result(
    comp_id: &str,
    boulder_id: &str,
    climber_id: &str,
    attempts_to_zone: u32,
    attempts_to_top: u32,
    zone: bool,
    top: bool,
) -> ResultEntry {
    ResultEntry {
        comp_id: comp_id.to_string(),
        comp_date: String::new(),
        boulder_id: boulder_id.to_string(),
        climber_id: climber_id.to_string(),
        attempts_to_zone,
        attempts_to_top,
        zone_completed: zone,
        top_completed: top,
    }
}
