use tracing::warn;

use crate::models::{ClimberStats, DivisionStats, StatsMap};

/// Partition climbers into the fixed divisions, keeping climber order.
///
/// Climbers whose division is not one of the known tiers are left out with a
/// warning; they still count on the overall and team boards.
pub fn aggregate_division_stats(climbers: &StatsMap<ClimberStats>) -> DivisionStats {
    let mut divisions = DivisionStats::default();

    for climber in climbers.values() {
        match climber.division() {
            Some(division) => divisions.get_mut(division).push(climber.clone()),
            None => {
                warn!(
                    climber_id = %climber.climber_id,
                    division = %climber.division,
                    "Unknown division, climber left out of division standings"
                );
            }
        }
    }

    divisions
}
