use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

use crate::models::Division;

/// Keyed container that remembers insertion order.
///
/// Lookups go through a hash index; iteration follows the order keys were
/// first inserted, which is what makes "first seen wins" reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for StatsMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> StatsMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        match self.index.get(key) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Value for `key`, inserting `make()` at the end if the key is new.
    /// An existing value is never replaced.
    pub fn get_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> V) -> &mut V {
        let idx = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.entries.push((key.to_string(), make()));
                let i = self.entries.len() - 1;
                self.index.insert(key.to_string(), i);
                i
            }
        };
        &mut self.entries[idx].1
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

/// Serialized as the list of values in insertion order; each value carries
/// its own id.
impl<V: Serialize> Serialize for StatsMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}

/// Points and attempts accumulated within one competition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompTotals {
    pub points: u32,
    pub attempts: u32,
}

/// Per-climber totals for one standings pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClimberStats {
    pub climber_id: String,
    pub climber_name: String,
    pub team_id: String,
    pub team_name: String,
    pub division: String,
    pub total_points: u32,
    pub total_attempts: u32,
    pub comp_breakdown: BTreeMap<String, CompTotals>,
}

impl ClimberStats {
    /// Recognized division, if the roster value is one of the fixed tiers.
    pub fn division(&self) -> Option<Division> {
        Division::parse(&self.division)
    }

    /// Points per attempt, or `None` with no attempts on record.
    pub fn efficiency(&self) -> Option<f64> {
        if self.total_attempts == 0 {
            None
        } else {
            Some(self.total_points as f64 / self.total_attempts as f64)
        }
    }
}

/// Per-team totals rolled up from the team's climbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub team_id: String,
    pub team_name: String,
    pub total_points: u32,
    pub total_attempts: u32,
    /// Climber ids in order of first appearance on the roster.
    pub climbers: Vec<String>,
}

/// Climbers partitioned into the fixed divisions. Every division is always
/// present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DivisionStats {
    #[serde(rename = "Beginner")]
    pub beginner: Vec<ClimberStats>,
    #[serde(rename = "Intermediate")]
    pub intermediate: Vec<ClimberStats>,
    #[serde(rename = "Advanced")]
    pub advanced: Vec<ClimberStats>,
}

impl DivisionStats {
    pub fn get(&self, division: Division) -> &[ClimberStats] {
        match division {
            Division::Beginner => &self.beginner,
            Division::Intermediate => &self.intermediate,
            Division::Advanced => &self.advanced,
        }
    }

    pub fn get_mut(&mut self, division: Division) -> &mut Vec<ClimberStats> {
        match division {
            Division::Beginner => &mut self.beginner,
            Division::Intermediate => &mut self.intermediate,
            Division::Advanced => &mut self.advanced,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Division, &[ClimberStats])> {
        Division::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    pub fn total_climbers(&self) -> usize {
        self.iter().map(|(_, list)| list.len()).sum()
    }
}
