//! Data models for league entities.
//!
//! This module contains the input row types and the derived statistics:
//!
//! - `RosterEntry`, `ResultEntry`: typed rows from the two input tables
//! - `Division`: the fixed skill tiers climbers compete within
//! - `CompFilter`, `Competition`: competition selection and listing
//! - `ClimberStats`, `TeamStats`, `DivisionStats`: aggregated standings
//! - `StatsMap`: insertion-ordered keyed container for the standings

pub mod competition;
pub mod division;
pub mod result;
pub mod roster;
pub mod stats;

pub use competition::{CompFilter, Competition};
pub use division::Division;
pub use result::ResultEntry;
pub use roster::RosterEntry;
pub use stats::{ClimberStats, CompTotals, DivisionStats, StatsMap, TeamStats};
