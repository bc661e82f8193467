use tracing::debug;

use crate::models::{ClimberStats, RosterEntry, StatsMap, TeamStats};

/// Roll climber totals up to teams.
///
/// Teams are seeded from the roster in order of first appearance, each
/// listing its distinct climber ids. Every climber's totals are then added
/// to the team recorded on their climber stats.
pub fn aggregate_team_stats(
    climbers: &StatsMap<ClimberStats>,
    roster: &[RosterEntry],
) -> StatsMap<TeamStats> {
    let mut teams: StatsMap<TeamStats> = StatsMap::new();

    for entry in roster {
        let team = teams.get_or_insert_with(&entry.team_id, || TeamStats {
            team_id: entry.team_id.clone(),
            team_name: entry.team_name.clone(),
            total_points: 0,
            total_attempts: 0,
            climbers: Vec::new(),
        });
        if !team.climbers.contains(&entry.climber_id) {
            team.climbers.push(entry.climber_id.clone());
        }
    }

    for climber in climbers.values() {
        match teams.get_mut(&climber.team_id) {
            Some(team) => {
                team.total_points = team.total_points.saturating_add(climber.total_points);
                team.total_attempts = team.total_attempts.saturating_add(climber.total_attempts);
            }
            None => {
                debug!(
                    climber_id = %climber.climber_id,
                    team_id = %climber.team_id,
                    "Climber's team not on the roster, not counted"
                );
            }
        }
    }

    teams
}
