//! The two raw input tables, loaded once and reused by every standings pass.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::LoadError;
use crate::models::{Competition, ResultEntry, RosterEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub roster: Vec<RosterEntry>,
    pub results: Vec<ResultEntry>,
}

impl Dataset {
    pub fn new(roster: Vec<RosterEntry>, results: Vec<ResultEntry>) -> Self {
        Self { roster, results }
    }

    /// Parse both tables. Either one missing a required column fails the
    /// load; the roster is checked first.
    pub fn from_csv(roster_text: &str, results_text: &str) -> Result<Self, LoadError> {
        let roster = RosterEntry::parse_all(roster_text)?;
        let results = ResultEntry::parse_all(results_text)?;
        debug!(
            roster_rows = roster.len(),
            result_rows = results.len(),
            "Loaded dataset"
        );
        Ok(Self { roster, results })
    }

    /// Distinct competitions in the results, oldest first. The first date
    /// seen for a competition id is the one reported.
    pub fn competitions(&self) -> Vec<Competition> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut comps: Vec<Competition> = self
            .results
            .iter()
            .filter(|r| seen.insert(r.comp_id.as_str()))
            .map(|r| Competition {
                comp_id: r.comp_id.clone(),
                comp_date: r.comp_date.clone(),
            })
            .collect();
        comps.sort_by(Competition::cmp_chronological);
        comps
    }

    pub fn has_competition(&self, comp_id: &str) -> bool {
        self.results.iter().any(|r| r.comp_id == comp_id)
    }
}
