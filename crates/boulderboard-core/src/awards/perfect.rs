//! Perfect Score: topping every boulder set in a competition.
//!
//! A competition's boulder set is every distinct boulder id that appears in
//! its results. A climber who topped all of them in that competition has a
//! perfect clearance. Clearances from all competitions are pooled and the
//! one with the fewest attempts wins.

use std::collections::{HashMap, HashSet};

use super::{Award, Contest, PerfectScore};
use crate::models::{ClimberStats, ResultEntry, StatsMap};

/// One climber's record within one competition.
#[derive(Debug, Default)]
struct CompRun<'r> {
    topped: HashSet<&'r str>,
    attempts: u32,
}

/// A perfect clearance of one competition.
#[derive(Debug, Clone)]
struct Clearance<'a> {
    climber: &'a ClimberStats,
    comp_id: String,
    attempts: u32,
}

pub(crate) fn perfect_score(
    results: &[&ResultEntry],
    climbers: &StatsMap<ClimberStats>,
) -> Option<Award<PerfectScore>> {
    // Competitions and their boulder sets, in first-seen order
    let mut comps: Vec<&str> = Vec::new();
    let mut boulders: HashMap<&str, HashSet<&str>> = HashMap::new();
    // Climbers per competition, in first-seen order
    let mut runs: HashMap<&str, Vec<(&str, CompRun<'_>)>> = HashMap::new();

    for result in results {
        let comp = result.comp_id.as_str();
        let set = boulders.entry(comp).or_insert_with(|| {
            comps.push(comp);
            HashSet::new()
        });
        set.insert(result.boulder_id.as_str());

        let comp_runs = runs.entry(comp).or_default();
        let idx = match comp_runs.iter().position(|(id, _)| *id == result.climber_id) {
            Some(idx) => idx,
            None => {
                comp_runs.push((result.climber_id.as_str(), CompRun::default()));
                comp_runs.len() - 1
            }
        };
        let run = &mut comp_runs[idx].1;
        run.attempts = run.attempts.saturating_add(result.attempts());
        if result.top_completed {
            run.topped.insert(result.boulder_id.as_str());
        }
    }

    let mut clearances: Vec<Clearance<'_>> = Vec::new();
    for comp in &comps {
        let total = boulders.get(comp).map(HashSet::len).unwrap_or(0);
        if total == 0 {
            continue;
        }
        for (climber_id, run) in runs.get(comp).into_iter().flatten() {
            if run.topped.len() != total {
                continue;
            }
            // Only roster climbers can be named
            if let Some(climber) = climbers.get(climber_id) {
                clearances.push(Clearance {
                    climber,
                    comp_id: comp.to_string(),
                    attempts: run.attempts,
                });
            }
        }
    }

    let winners = Contest::lowest(|c: &Clearance<'_>| c.attempts as f64).winners(&clearances);
    let attempts = winners.first()?.attempts;

    let mut comp_ids: Vec<String> = Vec::new();
    for winner in &winners {
        if !comp_ids.contains(&winner.comp_id) {
            comp_ids.push(winner.comp_id.clone());
        }
    }

    // Name the competition when the winners come from more than one
    let names: Vec<String> = if comp_ids.len() > 1 {
        winners
            .iter()
            .map(|w| format!("{} ({})", w.climber.climber_name, w.comp_id))
            .collect()
    } else {
        winners.iter().map(|w| w.climber.climber_name.clone()).collect()
    };

    let detail = PerfectScore {
        attempts,
        comp_ids,
        other_comps_count: clearances.len() - winners.len(),
    };
    Award::from_winners(names, detail)
}
