//! Competitive ordering and ranking of climbers and teams.
//!
//! Standing order is points descending, then attempts ascending, then name
//! ascending ignoring case. A rank is the 1-based position in that order and
//! stays attached to its row: re-sorting a ranked board by another column for
//! display moves the rank along with the row instead of renumbering.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Serialize;

use crate::models::{ClimberStats, TeamStats};
use crate::utils::{cmp_ignore_case, contains_ignore_case};

/// Anything that can appear on a leaderboard.
pub trait Standing {
    fn total_points(&self) -> u32;
    fn total_attempts(&self) -> u32;
    /// Name used as the final tie-break and for display.
    fn name(&self) -> &str;

    fn team_name(&self) -> Option<&str> {
        None
    }

    fn division_name(&self) -> Option<&str> {
        None
    }
}

impl Standing for ClimberStats {
    fn total_points(&self) -> u32 {
        self.total_points
    }

    fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    fn name(&self) -> &str {
        &self.climber_name
    }

    fn team_name(&self) -> Option<&str> {
        Some(&self.team_name)
    }

    fn division_name(&self) -> Option<&str> {
        Some(&self.division)
    }
}

impl Standing for TeamStats {
    fn total_points(&self) -> u32 {
        self.total_points
    }

    fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    fn name(&self) -> &str {
        &self.team_name
    }
}

impl<T: Standing + ?Sized> Standing for &T {
    fn total_points(&self) -> u32 {
        (**self).total_points()
    }

    fn total_attempts(&self) -> u32 {
        (**self).total_attempts()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn team_name(&self) -> Option<&str> {
        (**self).team_name()
    }

    fn division_name(&self) -> Option<&str> {
        (**self).division_name()
    }
}

/// Standing order: more points first, then fewer attempts, then name.
pub fn compare_standing<T: Standing>(a: &T, b: &T) -> Ordering {
    b.total_points()
        .cmp(&a.total_points())
        .then_with(|| a.total_attempts().cmp(&b.total_attempts()))
        .then_with(|| cmp_ignore_case(a.name(), b.name()))
}

/// Sort into standing order. Items equal on every key keep input order.
pub fn sort_leaderboard<T: Standing>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut sorted: Vec<T> = items.into_iter().collect();
    sorted.sort_by(compare_standing);
    sorted
}

/// A leaderboard row with the rank it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<T> {
    pub rank: usize,
    #[serde(flatten)]
    pub item: T,
}

/// Sort into standing order and number the rows from 1.
pub fn rank_leaderboard<T: Standing>(items: impl IntoIterator<Item = T>) -> Vec<Ranked<T>> {
    sort_leaderboard(items)
        .into_iter()
        .enumerate()
        .map(|(i, item)| Ranked { rank: i + 1, item })
        .collect()
}

/// Column a ranked board can be re-sorted by for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardColumn {
    #[default]
    Rank,
    Name,
    Team,
    Points,
    Attempts,
}

impl FromStr for LeaderboardColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rank" => Ok(LeaderboardColumn::Rank),
            "name" => Ok(LeaderboardColumn::Name),
            "team" => Ok(LeaderboardColumn::Team),
            "points" => Ok(LeaderboardColumn::Points),
            "attempts" => Ok(LeaderboardColumn::Attempts),
            other => Err(format!(
                "unknown column '{}' (expected rank, name, team, points or attempts)",
                other
            )),
        }
    }
}

impl std::fmt::Display for LeaderboardColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardColumn::Rank => write!(f, "rank"),
            LeaderboardColumn::Name => write!(f, "name"),
            LeaderboardColumn::Team => write!(f, "team"),
            LeaderboardColumn::Points => write!(f, "points"),
            LeaderboardColumn::Attempts => write!(f, "attempts"),
        }
    }
}

/// Re-sort ranked rows by a display column. Ranks travel with their rows;
/// equal values fall back to rank order.
pub fn sort_ranked<T: Standing>(rows: &mut [Ranked<T>], column: LeaderboardColumn, ascending: bool) {
    rows.sort_by(|a, b| {
        let cmp = match column {
            LeaderboardColumn::Rank => Ordering::Equal,
            LeaderboardColumn::Name => cmp_ignore_case(a.item.name(), b.item.name()),
            LeaderboardColumn::Team => cmp_ignore_case(
                a.item.team_name().unwrap_or(""),
                b.item.team_name().unwrap_or(""),
            ),
            LeaderboardColumn::Points => a.item.total_points().cmp(&b.item.total_points()),
            LeaderboardColumn::Attempts => a.item.total_attempts().cmp(&b.item.total_attempts()),
        };

        let cmp = if ascending { cmp } else { cmp.reverse() };
        cmp.then_with(|| a.rank.cmp(&b.rank))
    });
}

/// Keep rows whose name, team or division contains `query`, ignoring case.
/// An empty query keeps everything. Ranks are left untouched.
pub fn search_ranked<T: Standing>(rows: Vec<Ranked<T>>, query: &str) -> Vec<Ranked<T>> {
    let query = query.trim();
    if query.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            contains_ignore_case(row.item.name(), query)
                || row
                    .item
                    .team_name()
                    .map(|s| contains_ignore_case(s, query))
                    .unwrap_or(false)
                || row
                    .item
                    .division_name()
                    .map(|s| contains_ignore_case(s, query))
                    .unwrap_or(false)
        })
        .collect()
}
