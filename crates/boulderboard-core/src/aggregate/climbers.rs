use tracing::{debug, warn};

use crate::models::{ClimberStats, CompFilter, CompTotals, ResultEntry, RosterEntry, StatsMap};
use crate::scoring::compute_points;

/// Build per-climber totals.
///
/// Every climber on the roster gets an entry, zeroed if they have no
/// results. When a climber id appears on several roster rows, the first row
/// decides their name, team and division. Results outside `filter` are
/// ignored, and results for climbers missing from the roster are skipped
/// with a warning.
pub fn aggregate_climber_stats(
    roster: &[RosterEntry],
    results: &[ResultEntry],
    filter: &CompFilter,
) -> StatsMap<ClimberStats> {
    let mut climbers: StatsMap<ClimberStats> = StatsMap::new();

    for entry in roster {
        climbers.get_or_insert_with(&entry.climber_id, || ClimberStats {
            climber_id: entry.climber_id.clone(),
            climber_name: entry.climber_name.clone(),
            team_id: entry.team_id.clone(),
            team_name: entry.team_name.clone(),
            division: entry.division.clone(),
            total_points: 0,
            total_attempts: 0,
            comp_breakdown: Default::default(),
        });
    }

    let mut counted = 0usize;
    for result in results.iter().filter(|r| filter.matches(&r.comp_id)) {
        let Some(stats) = climbers.get_mut(&result.climber_id) else {
            warn!(
                climber_id = %result.climber_id,
                comp_id = %result.comp_id,
                boulder_id = %result.boulder_id,
                "Skipping result for climber not on the roster"
            );
            continue;
        };

        let points = compute_points(result);
        let attempts = result.attempts();

        stats.total_points = stats.total_points.saturating_add(points);
        stats.total_attempts = stats.total_attempts.saturating_add(attempts);

        let bucket: &mut CompTotals = stats
            .comp_breakdown
            .entry(result.comp_id.clone())
            .or_default();
        bucket.points = bucket.points.saturating_add(points);
        bucket.attempts = bucket.attempts.saturating_add(attempts);

        counted += 1;
    }

    debug!(
        climbers = climbers.len(),
        results = counted,
        filter = %filter,
        "Aggregated climber stats"
    );

    climbers
}
