//! Core library for boulderboard.
//!
//! Turns two tabular inputs, a team roster and per-boulder competition
//! results, into climber, team and division standings plus a set of
//! "fun stat" awards. Everything here is a pure function of its inputs:
//! fetching the CSV text and rendering the output belong to the caller.
//!
//! The usual flow is:
//!
//! ```no_run
//! use boulderboard_core::{CompFilter, Dataset, Standings};
//!
//! # fn load() -> Result<(), boulderboard_core::LoadError> {
//! let dataset = Dataset::from_csv("team_id,...", "comp_id,...")?;
//! let standings = Standings::compute(&dataset, &CompFilter::All);
//! for row in standings.climber_leaderboard() {
//!     println!("{:>3} {} {}", row.rank, row.item.climber_name, row.item.total_points);
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod awards;
pub mod csv;
pub mod dataset;
pub mod error;
pub mod leaderboard;
pub mod models;
pub mod scoring;
pub mod standings;
pub mod utils;

pub use aggregate::{aggregate_climber_stats, aggregate_division_stats, aggregate_team_stats};
pub use awards::{compute_fun_stats, Award, AwardSummary, FunStats};
pub use dataset::Dataset;
pub use error::{DatasetKind, LoadError};
pub use leaderboard::{
    rank_leaderboard, search_ranked, sort_leaderboard, sort_ranked, LeaderboardColumn, Ranked,
    Standing,
};
pub use models::{
    ClimberStats, CompFilter, CompTotals, Competition, Division, DivisionStats, ResultEntry,
    RosterEntry, StatsMap, TeamStats,
};
pub use scoring::compute_points;
pub use standings::{Scoreboard, Standings};
