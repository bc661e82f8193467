//! Climber performance awards: Try Hard, Flash Master, Efficiency King and
//! Zone Hero.

use std::collections::HashMap;

use super::{Award, Contest, Efficiency, FlashCount, TryHard, ZoneCount, EFFICIENCY_TOLERANCE};
use crate::models::{ClimberStats, ResultEntry, StatsMap};

/// Per-climber counts over the selected results, alongside their stats.
#[derive(Debug, Clone)]
pub(crate) struct ClimberTally<'a> {
    pub stats: &'a ClimberStats,
    pub tops: u32,
    pub flashes: u32,
    pub zones_only: u32,
}

impl ClimberTally<'_> {
    fn name(&self) -> String {
        self.stats.climber_name.clone()
    }

    fn attempts(&self) -> u32 {
        self.stats.total_attempts
    }
}

/// One tally per roster climber, in roster order. Results for climbers not
/// on the roster are not counted.
pub(crate) fn climber_tallies<'a>(
    results: &[&ResultEntry],
    climbers: &'a StatsMap<ClimberStats>,
) -> Vec<ClimberTally<'a>> {
    let mut tallies: Vec<ClimberTally<'a>> = climbers
        .values()
        .map(|stats| ClimberTally {
            stats,
            tops: 0,
            flashes: 0,
            zones_only: 0,
        })
        .collect();

    let positions: HashMap<&str, usize> = climbers
        .keys()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect();

    for result in results {
        let Some(&idx) = positions.get(result.climber_id.as_str()) else {
            continue;
        };
        let tally = &mut tallies[idx];
        if result.top_completed {
            tally.tops += 1;
        }
        if result.is_flash() {
            tally.flashes += 1;
        }
        if result.is_zone_only() {
            tally.zones_only += 1;
        }
    }

    tallies
}

/// Most attempts among climbers who topped at least once; more tops wins a
/// tie.
pub(crate) fn try_hard(tallies: &[ClimberTally<'_>]) -> Option<Award<TryHard>> {
    let candidates: Vec<ClimberTally<'_>> = tallies.iter().filter(|t| t.tops > 0).cloned().collect();
    let winners = Contest::highest(|t: &ClimberTally<'_>| t.attempts() as f64)
        .then(|a, b| b.tops.cmp(&a.tops))
        .winners(&candidates);

    let first = winners.first()?;
    let detail = TryHard {
        attempts: first.attempts(),
        tops: first.tops,
    };
    Award::from_winners(winners.iter().map(|t| t.name()).collect(), detail)
}

/// Most flashes; fewer total attempts wins a tie.
pub(crate) fn flash_master(tallies: &[ClimberTally<'_>]) -> Option<Award<FlashCount>> {
    let candidates: Vec<ClimberTally<'_>> = tallies.iter().filter(|t| t.flashes > 0).cloned().collect();
    let winners = Contest::highest(|t: &ClimberTally<'_>| t.flashes as f64)
        .then(|a, b| a.attempts().cmp(&b.attempts()))
        .winners(&candidates);

    let first = winners.first()?;
    let detail = FlashCount {
        flashes: first.flashes,
        attempts: first.attempts(),
    };
    Award::from_winners(winners.iter().map(|t| t.name()).collect(), detail)
}

/// Best points per attempt among climbers with any attempts. Ratios within
/// the tolerance of the best are tied.
pub(crate) fn efficiency_king(tallies: &[ClimberTally<'_>]) -> Option<Award<Efficiency>> {
    let candidates: Vec<ClimberTally<'_>> = tallies.iter().filter(|t| t.attempts() > 0).cloned().collect();
    let ratio = |t: &ClimberTally<'_>| t.stats.efficiency().unwrap_or(0.0);
    let winners = Contest::highest(ratio)
        .within(EFFICIENCY_TOLERANCE)
        .winners(&candidates);

    // Report the figures of the best ratio among the tied winners
    let best = winners
        .iter()
        .copied()
        .reduce(|best, t| if ratio(t) > ratio(best) { t } else { best })?;
    let detail = Efficiency {
        ratio: ratio(best),
        points: best.stats.total_points,
        attempts: best.attempts(),
    };
    Award::from_winners(winners.iter().map(|t| t.name()).collect(), detail)
}

/// Most zones reached without the top; fewer total attempts wins a tie.
pub(crate) fn zone_hero(tallies: &[ClimberTally<'_>]) -> Option<Award<ZoneCount>> {
    let candidates: Vec<ClimberTally<'_>> = tallies.iter().filter(|t| t.zones_only > 0).cloned().collect();
    let winners = Contest::highest(|t: &ClimberTally<'_>| t.zones_only as f64)
        .then(|a, b| a.attempts().cmp(&b.attempts()))
        .winners(&candidates);

    let first = winners.first()?;
    let detail = ZoneCount {
        zones: first.zones_only,
        attempts: first.attempts(),
    };
    Award::from_winners(winners.iter().map(|t| t.name()).collect(), detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climber(id: &str, name: &str, points: u32, attempts: u32) -> ClimberStats {
        ClimberStats {
            climber_id: id.to_string(),
            climber_name: name.to_string(),
            team_id: "T1".to_string(),
            team_name: "Alpha".to_string(),
            division: "Beginner".to_string(),
            total_points: points,
            total_attempts: attempts,
            comp_breakdown: Default::default(),
        }
    }

    fn tally<'a>(stats: &'a ClimberStats, tops: u32, flashes: u32, zones_only: u32) -> ClimberTally<'a> {
        ClimberTally {
            stats,
            tops,
            flashes,
            zones_only,
        }
    }

    #[test]
    fn test_climber_tallies_count_tops_flashes_zones() {
        use crate::aggregate::fixtures::result;

        let mut climbers = StatsMap::new();
        climbers.get_or_insert_with("C1", || climber("C1", "Amy", 0, 0));
        climbers.get_or_insert_with("C2", || climber("C2", "Bo", 0, 0));

        let rows = vec![
            result("comp1", "b1", "C1", 1, 1, true, true),
            result("comp1", "b2", "C1", 1, 3, true, true),
            result("comp1", "b3", "C1", 2, 0, true, false),
            result("comp1", "b1", "GHOST", 1, 1, true, true),
        ];
        let refs: Vec<&ResultEntry> = rows.iter().collect();
        let tallies = climber_tallies(&refs, &climbers);

        assert_eq!(tallies.len(), 2);
        assert_eq!((tallies[0].tops, tallies[0].flashes, tallies[0].zones_only), (2, 1, 1));
        assert_eq!((tallies[1].tops, tallies[1].flashes, tallies[1].zones_only), (0, 0, 0));
    }

    #[test]
    fn test_try_hard_needs_a_top() {
        let a = climber("C1", "Amy", 0, 40);
        let b = climber("C2", "Bo", 100, 12);
        let tallies = vec![tally(&a, 0, 0, 0), tally(&b, 1, 0, 0)];

        let award = try_hard(&tallies).unwrap();
        // Amy has more attempts but never topped
        assert_eq!(award.name, "Bo");
        assert_eq!(award.detail, TryHard { attempts: 12, tops: 1 });
    }

    #[test]
    fn test_try_hard_tie_break_on_tops() {
        let a = climber("C1", "Amy", 100, 20);
        let b = climber("C2", "Bo", 200, 20);
        let c = climber("C3", "Cy", 200, 20);
        let tallies = vec![tally(&a, 1, 0, 0), tally(&b, 2, 0, 0), tally(&c, 2, 0, 0)];

        let award = try_hard(&tallies).unwrap();
        assert_eq!(award.name, "Bo & Cy");
        assert!(award.is_tie);
        assert_eq!(award.detail.tops, 2);
    }

    #[test]
    fn test_try_hard_none_without_tops() {
        let a = climber("C1", "Amy", 50, 20);
        assert!(try_hard(&[tally(&a, 0, 0, 1)]).is_none());
    }

    #[test]
    fn test_flash_master_tie_break_on_fewer_attempts() {
        let a = climber("C1", "Amy", 200, 9);
        let b = climber("C2", "Bo", 200, 4);
        let c = climber("C3", "Cy", 100, 1);
        let tallies = vec![tally(&a, 2, 2, 0), tally(&b, 2, 2, 0), tally(&c, 1, 1, 0)];

        let award = flash_master(&tallies).unwrap();
        assert_eq!(award.name, "Bo");
        assert_eq!(award.detail, FlashCount { flashes: 2, attempts: 4 });
        assert!(!award.is_tie);
    }

    #[test]
    fn test_flash_master_none_without_flashes() {
        let a = climber("C1", "Amy", 100, 3);
        assert!(flash_master(&[tally(&a, 1, 0, 0)]).is_none());
    }

    #[test]
    fn test_efficiency_king_tolerance_tie() {
        // 1.998, 2.000 and 2.0005 points per attempt
        let x = climber("C1", "X", 1998, 1000);
        let y = climber("C2", "Y", 2000, 1000);
        let z = climber("C3", "Z", 4001, 2000);
        let tallies = vec![tally(&x, 0, 0, 0), tally(&y, 0, 0, 0), tally(&z, 0, 0, 0)];

        let award = efficiency_king(&tallies).unwrap();
        assert_eq!(award.name, "Y & Z");
        assert!(award.is_tie);
        assert_eq!(award.detail.points, 4001);
        assert!((award.detail.ratio - 2.0005).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_king_skips_zero_attempts() {
        let idle = climber("C1", "Idle", 0, 0);
        let busy = climber("C2", "Busy", 50, 10);
        let award = efficiency_king(&[tally(&idle, 0, 0, 0), tally(&busy, 0, 0, 1)]).unwrap();
        assert_eq!(award.name, "Busy");
        assert!(efficiency_king(&[tally(&idle, 0, 0, 0)]).is_none());
    }

    #[test]
    fn test_zone_hero_tie_break_on_fewer_attempts() {
        let a = climber("C1", "Amy", 150, 12);
        let b = climber("C2", "Bo", 150, 7);
        let c = climber("C3", "Cy", 150, 7);
        let tallies = vec![tally(&a, 0, 0, 3), tally(&b, 0, 0, 3), tally(&c, 0, 0, 3)];

        let award = zone_hero(&tallies).unwrap();
        assert_eq!(award.name, "Bo & Cy");
        assert_eq!(award.detail, ZoneCount { zones: 3, attempts: 7 });
    }

    #[test]
    fn test_zone_hero_none_without_zone_only_results() {
        let a = climber("C1", "Amy", 100, 2);
        assert!(zone_hero(&[tally(&a, 1, 1, 0)]).is_none());
    }
}
