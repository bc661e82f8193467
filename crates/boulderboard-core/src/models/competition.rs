use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Literal that selects every competition.
pub const ALL_COMPS: &str = "all";

/// Which competitions feed a standings pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompFilter {
    #[default]
    All,
    Comp(String),
}

impl CompFilter {
    /// `"all"` (any case) or a blank value selects everything; anything else
    /// is taken as a competition id.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_COMPS) {
            CompFilter::All
        } else {
            CompFilter::Comp(s.to_string())
        }
    }

    pub fn matches(&self, comp_id: &str) -> bool {
        match self {
            CompFilter::All => true,
            CompFilter::Comp(id) => id == comp_id,
        }
    }
}

impl FromStr for CompFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CompFilter::parse(s))
    }
}

impl From<String> for CompFilter {
    fn from(s: String) -> Self {
        CompFilter::parse(&s)
    }
}

impl From<CompFilter> for String {
    fn from(filter: CompFilter) -> Self {
        filter.to_string()
    }
}

impl std::fmt::Display for CompFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompFilter::All => write!(f, "{}", ALL_COMPS),
            CompFilter::Comp(id) => write!(f, "{}", id),
        }
    }
}

/// A competition seen in the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub comp_id: String,
    pub comp_date: String,
}

impl Competition {
    /// Parse `comp_date` as `YYYY-MM-DD`, `MM/DD/YYYY` or RFC 3339.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_comp_date(&self.comp_date)
    }

    /// Chronological order; undated competitions sort last, then by id.
    pub fn cmp_chronological(&self, other: &Self) -> Ordering {
        match (self.date(), other.date()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.comp_id.cmp(&other.comp_id))
    }

    /// Date for display, e.g. "Jan 10, 2024", falling back to the raw text.
    pub fn formatted_date(&self) -> String {
        match self.date() {
            Some(date) => date.format("%b %d, %Y").to_string(),
            None if self.comp_date.is_empty() => "TBD".to_string(),
            None => self.comp_date.clone(),
        }
    }
}

fn parse_comp_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(id: &str, date: &str) -> Competition {
        Competition {
            comp_id: id.to_string(),
            comp_date: date.to_string(),
        }
    }

    #[test]
    fn test_comp_filter_parse() {
        assert_eq!(CompFilter::parse("all"), CompFilter::All);
        assert_eq!(CompFilter::parse(" ALL "), CompFilter::All);
        assert_eq!(CompFilter::parse(""), CompFilter::All);
        assert_eq!(CompFilter::parse("comp2"), CompFilter::Comp("comp2".to_string()));
    }

    #[test]
    fn test_comp_filter_matches() {
        assert!(CompFilter::All.matches("anything"));
        let filter = CompFilter::parse("comp1");
        assert!(filter.matches("comp1"));
        assert!(!filter.matches("comp10"));
    }

    #[test]
    fn test_comp_filter_serde_roundtrip_as_string() {
        let json = serde_json::to_string(&CompFilter::parse("comp3")).unwrap();
        assert_eq!(json, "\"comp3\"");
        let back: CompFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(back, CompFilter::All);
    }

    #[test]
    fn test_competition_dates() {
        assert_eq!(comp("c", "2024-03-05").date(), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(comp("c", "03/05/2024").date(), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(
            comp("c", "2024-03-05T18:00:00Z").date(),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(comp("c", "spring").date(), None);
        assert_eq!(comp("c", "2024-03-05").formatted_date(), "Mar 05, 2024");
        assert_eq!(comp("c", "").formatted_date(), "TBD");
    }

    #[test]
    fn test_competition_chronological_order() {
        let mut comps = vec![
            comp("z", "someday"),
            comp("b", "2024-02-01"),
            comp("a", "2024-02-01"),
            comp("c", "2023-12-31"),
        ];
        comps.sort_by(Competition::cmp_chronological);
        let ids: Vec<_> = comps.iter().map(|c| c.comp_id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b", "z"]);
    }
}
