//! Point values for a single result row.

use crate::models::ResultEntry;

/// Points for reaching the zone hold.
pub const ZONE_POINTS: u32 = 50;

/// Additional points for topping the boulder.
pub const TOP_POINTS: u32 = 50;

/// Points earned by one result: 50 for the zone plus 50 for the top.
/// Always 0, 50 or 100.
pub fn compute_points(result: &ResultEntry) -> u32 {
    let zone = if result.zone_completed { ZONE_POINTS } else { 0 };
    let top = if result.top_completed { TOP_POINTS } else { 0 };
    zone + top
}
