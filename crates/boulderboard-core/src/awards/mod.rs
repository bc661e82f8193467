//! "Fun stat" awards computed alongside the standings.
//!
//! Eight independent awards, each either absent (nothing qualifies) or an
//! [`Award`] naming its winners. When several candidates share the winning
//! value after the award's tie-break, all of them are named, joined with
//! `" & "`, and the award is flagged as a tie.
//!
//! | Award | Winning metric | Tie-break |
//! |---|---|---|
//! | Most Attempts (Team) | most team attempts | none |
//! | Most Attempts (Boulder) | most attempts on one boulder | none |
//! | Least Attempts (Boulder) | fewest (non-zero) attempts on one boulder | none |
//! | Try Hard | most attempts among climbers with a top | more tops |
//! | Flash Master | most flashes | fewer attempts |
//! | Efficiency King | best points per attempt (within 0.001) | none |
//! | Perfect Score | fewest attempts topping every boulder of a comp | none |
//! | Zone Hero | most zones without the top | fewer attempts |

mod attempts;
mod contest;
mod perfect;
mod performance;

use serde::Serialize;
use tracing::debug;

use crate::models::{ClimberStats, CompFilter, ResultEntry, StatsMap, TeamStats};
use crate::utils::format_ratio;

pub use contest::{Contest, Goal};

/// Separator between the names of tied winners.
pub const TIE_SEPARATOR: &str = " & ";

/// Ratios closer than this are considered equal for Efficiency King.
pub const EFFICIENCY_TOLERANCE: f64 = 0.001;

/// One award outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Award<D> {
    /// Display name: the winner, or every tied winner joined with `" & "`.
    pub name: String,
    pub winners: Vec<String>,
    pub is_tie: bool,
    #[serde(flatten)]
    pub detail: D,
}

impl<D> Award<D> {
    /// Build an award from its winner labels; `None` if there are none.
    pub fn from_winners(winners: Vec<String>, detail: D) -> Option<Self> {
        if winners.is_empty() {
            return None;
        }
        Some(Self {
            name: winners.join(TIE_SEPARATOR),
            is_tie: winners.len() > 1,
            winners,
            detail,
        })
    }
}

/// Attempt total behind a team or boulder award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttemptTally {
    pub attempts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TryHard {
    pub attempts: u32,
    pub tops: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlashCount {
    pub flashes: u32,
    pub attempts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Efficiency {
    pub ratio: f64,
    pub points: u32,
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfectScore {
    pub attempts: u32,
    /// Competitions the winners cleared, in first-seen order.
    pub comp_ids: Vec<String>,
    /// Perfect clearances that qualified but did not win.
    pub other_comps_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneCount {
    pub zones: u32,
    pub attempts: u32,
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

impl std::fmt::Display for AttemptTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", plural(self.attempts, "attempt"))
    }
}

impl std::fmt::Display for TryHard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", plural(self.attempts, "attempt"), plural(self.tops, "top"))
    }
}

impl std::fmt::Display for FlashCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.flashes == 1 {
            write!(f, "1 flash")
        } else {
            write!(f, "{} flashes", self.flashes)
        }
    }
}

impl std::fmt::Display for Efficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pts/attempt", format_ratio(self.ratio))
    }
}

impl std::fmt::Display for PerfectScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", plural(self.attempts, "attempt"))?;
        if self.other_comps_count > 0 {
            write!(f, " ({} other perfect)", self.other_comps_count)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for ZoneCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", plural(self.zones, "zone"))
    }
}

/// Every award for one standings pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunStats {
    pub most_attempts_team: Option<Award<AttemptTally>>,
    pub most_attempts_boulder: Option<Award<AttemptTally>>,
    pub least_attempts_boulder: Option<Award<AttemptTally>>,
    pub try_hard: Option<Award<TryHard>>,
    pub flash_master: Option<Award<FlashCount>>,
    pub efficiency_king: Option<Award<Efficiency>>,
    pub perfect_score: Option<Award<PerfectScore>>,
    pub zone_hero: Option<Award<ZoneCount>>,
}

/// Flattened view of one award for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardSummary {
    pub title: &'static str,
    pub name: Option<String>,
    pub is_tie: bool,
    pub detail: Option<String>,
}

impl AwardSummary {
    fn of<D: std::fmt::Display>(title: &'static str, award: &Option<Award<D>>) -> Self {
        match award {
            Some(award) => Self {
                title,
                name: Some(award.name.clone()),
                is_tie: award.is_tie,
                detail: Some(award.detail.to_string()),
            },
            None => Self {
                title,
                name: None,
                is_tie: false,
                detail: None,
            },
        }
    }
}

impl FunStats {
    /// Awards in display order.
    pub fn summaries(&self) -> Vec<AwardSummary> {
        vec![
            AwardSummary::of("Most Attempts (Team)", &self.most_attempts_team),
            AwardSummary::of("Most Attempts (Boulder)", &self.most_attempts_boulder),
            AwardSummary::of("Least Attempts (Boulder)", &self.least_attempts_boulder),
            AwardSummary::of("Try Hard", &self.try_hard),
            AwardSummary::of("Flash Master", &self.flash_master),
            AwardSummary::of("Efficiency King", &self.efficiency_king),
            AwardSummary::of("Perfect Score", &self.perfect_score),
            AwardSummary::of("Zone Hero", &self.zone_hero),
        ]
    }

    pub fn awarded_count(&self) -> usize {
        self.summaries().iter().filter(|s| s.name.is_some()).count()
    }
}

/// Compute every award over the results selected by `filter`.
///
/// `climbers` and `teams` must come from the same filter. With no selected
/// results every award is absent.
pub fn compute_fun_stats(
    results: &[ResultEntry],
    climbers: &StatsMap<ClimberStats>,
    teams: &StatsMap<TeamStats>,
    filter: &CompFilter,
) -> FunStats {
    let results: Vec<&ResultEntry> = results.iter().filter(|r| filter.matches(&r.comp_id)).collect();
    if results.is_empty() {
        debug!(filter = %filter, "No results selected, no awards");
        return FunStats::default();
    }

    let boulders = attempts::boulder_tallies(&results);
    let tallies = performance::climber_tallies(&results, climbers);

    let stats = FunStats {
        most_attempts_team: attempts::most_attempts_team(teams),
        most_attempts_boulder: attempts::most_attempts_boulder(&boulders),
        least_attempts_boulder: attempts::least_attempts_boulder(&boulders),
        try_hard: performance::try_hard(&tallies),
        flash_master: performance::flash_master(&tallies),
        efficiency_king: performance::efficiency_king(&tallies),
        perfect_score: perfect::perfect_score(&results, climbers),
        zone_hero: performance::zone_hero(&tallies),
    };

    debug!(filter = %filter, awarded = stats.awarded_count(), "Computed fun stats");
    stats
}
