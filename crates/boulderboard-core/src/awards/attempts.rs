//! Attempt-count awards for teams and boulders.
//!
//! None of these has a tie-break: equal totals are all named, in order of
//! first appearance (roster order for teams, results order for boulders).

use std::collections::HashMap;

use super::{AttemptTally, Award, Contest};
use crate::models::{ResultEntry, StatsMap, TeamStats};

/// Summed attempts on one boulder of one competition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoulderTally {
    pub comp_id: String,
    pub boulder_id: String,
    pub attempts: u32,
}

impl BoulderTally {
    pub fn label(&self) -> String {
        format!("{} ({})", self.boulder_id, self.comp_id)
    }
}

/// Attempts per (comp, boulder), in order of first appearance.
pub(crate) fn boulder_tallies(results: &[&ResultEntry]) -> Vec<BoulderTally> {
    let mut tallies: Vec<BoulderTally> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for result in results {
        let key = (result.comp_id.as_str(), result.boulder_id.as_str());
        let idx = *index.entry(key).or_insert_with(|| {
            tallies.push(BoulderTally {
                comp_id: result.comp_id.clone(),
                boulder_id: result.boulder_id.clone(),
                attempts: 0,
            });
            tallies.len() - 1
        });
        let tally = &mut tallies[idx];
        tally.attempts = tally.attempts.saturating_add(result.attempts());
    }

    tallies
}

pub(crate) fn most_attempts_team(teams: &StatsMap<TeamStats>) -> Option<Award<AttemptTally>> {
    let candidates: Vec<&TeamStats> = teams.values().collect();
    let winners = Contest::highest(|t: &&TeamStats| t.total_attempts as f64).winners(&candidates);

    let attempts = winners.first()?.total_attempts;
    Award::from_winners(
        winners.iter().map(|t| t.team_name.clone()).collect(),
        AttemptTally { attempts },
    )
}

pub(crate) fn most_attempts_boulder(tallies: &[BoulderTally]) -> Option<Award<AttemptTally>> {
    let winners = Contest::highest(|b: &BoulderTally| b.attempts as f64).winners(tallies);
    boulder_award(&winners)
}

/// Boulders nobody spent an attempt on are not candidates.
pub(crate) fn least_attempts_boulder(tallies: &[BoulderTally]) -> Option<Award<AttemptTally>> {
    let attempted: Vec<BoulderTally> = tallies.iter().filter(|b| b.attempts > 0).cloned().collect();
    let winners = Contest::lowest(|b: &BoulderTally| b.attempts as f64).winners(&attempted);
    boulder_award(&winners)
}

fn boulder_award(winners: &[&BoulderTally]) -> Option<Award<AttemptTally>> {
    let attempts = winners.first()?.attempts;
    Award::from_winners(
        winners.iter().map(|b| b.label()).collect(),
        AttemptTally { attempts },
    )
}
