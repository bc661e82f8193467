//! One complete pass of the pipeline, and the holder for the latest pass.
//!
//! A pass always starts from the raw rows: changing the competition filter
//! recomputes every climber, team, division and award from scratch.

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{aggregate_climber_stats, aggregate_division_stats, aggregate_team_stats};
use crate::awards::{compute_fun_stats, FunStats};
use crate::dataset::Dataset;
use crate::leaderboard::{rank_leaderboard, Ranked};
use crate::models::{ClimberStats, CompFilter, Division, DivisionStats, StatsMap, TeamStats};

/// Everything derived from a dataset under one competition filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings {
    pub filter: CompFilter,
    pub climbers: StatsMap<ClimberStats>,
    pub teams: StatsMap<TeamStats>,
    pub divisions: DivisionStats,
    pub fun_stats: FunStats,
}

impl Standings {
    pub fn compute(dataset: &Dataset, filter: &CompFilter) -> Self {
        let climbers = aggregate_climber_stats(&dataset.roster, &dataset.results, filter);
        let teams = aggregate_team_stats(&climbers, &dataset.roster);
        let divisions = aggregate_division_stats(&climbers);
        let fun_stats = compute_fun_stats(&dataset.results, &climbers, &teams, filter);

        debug!(
            filter = %filter,
            climbers = climbers.len(),
            teams = teams.len(),
            "Computed standings"
        );

        Self {
            filter: filter.clone(),
            climbers,
            teams,
            divisions,
            fun_stats,
        }
    }

    pub fn climber_leaderboard(&self) -> Vec<Ranked<&ClimberStats>> {
        rank_leaderboard(self.climbers.values())
    }

    pub fn team_leaderboard(&self) -> Vec<Ranked<&TeamStats>> {
        rank_leaderboard(self.teams.values())
    }

    /// Ranked within the division only.
    pub fn division_leaderboard(&self, division: Division) -> Vec<Ranked<&ClimberStats>> {
        rank_leaderboard(self.divisions.get(division))
    }
}

/// Holds the dataset and the standings for the current filter.
///
/// The standings are replaced wholesale whenever the filter changes.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    dataset: Dataset,
    standings: Standings,
}

impl Scoreboard {
    pub fn new(dataset: Dataset, filter: CompFilter) -> Self {
        let standings = Standings::compute(&dataset, &filter);
        Self { dataset, standings }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    pub fn filter(&self) -> &CompFilter {
        &self.standings.filter
    }

    /// Recompute everything for `filter`.
    pub fn set_filter(&mut self, filter: CompFilter) -> &Standings {
        self.standings = Standings::compute(&self.dataset, &filter);
        &self.standings
    }
}
