use serde::{Deserialize, Serialize};

/// Skill tier a climber competes within. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    Beginner,
    Intermediate,
    Advanced,
}

impl Division {
    /// All divisions in display order.
    pub const ALL: [Division; 3] = [
        Division::Beginner,
        Division::Intermediate,
        Division::Advanced,
    ];

    /// Parse a roster division cell. Case-insensitive; anything outside the
    /// three known names is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Division::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Beginner => "Beginner",
            Division::Intermediate => "Intermediate",
            Division::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
