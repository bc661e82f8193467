//! Roll raw roster and result rows up into climber, team and division
//! standings.
//!
//! Each function builds fresh output from its inputs; nothing is carried
//! between passes.

pub mod climbers;
pub mod divisions;
pub mod teams;

pub use climbers::aggregate_climber_stats;
pub use divisions::aggregate_division_stats;
pub use teams::aggregate_team_stats;
