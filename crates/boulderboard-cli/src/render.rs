//! Plain-text rendering of leaderboards, awards and competitions.

use std::fmt::Write;

use boulderboard_core::utils::truncate_string;
use boulderboard_core::{AwardSummary, Competition, Ranked, Standing};

const NAME_WIDTH: usize = 24;
const TEAM_WIDTH: usize = 20;
const DIVISION_WIDTH: usize = 12;

/// Fixed-width table of ranked rows. Team and division columns appear only
/// for rows that have them (climbers, not teams).
pub fn leaderboard_table<T: Standing>(title: &str, rows: &[Ranked<T>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);

    if rows.is_empty() {
        let _ = writeln!(out, "  (no entries)");
        return out;
    }

    let with_team = rows.iter().any(|r| r.item.team_name().is_some());

    let mut header = format!("{:>4}  {:<NAME_WIDTH$}", "#", "Name");
    if with_team {
        let _ = write!(header, "  {:<TEAM_WIDTH$}  {:<DIVISION_WIDTH$}", "Team", "Division");
    }
    let _ = write!(header, "  {:>6}  {:>8}", "Points", "Attempts");
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(out, "{}", "-".repeat(header.trim_end().chars().count()));

    for row in rows {
        let item = &row.item;
        let mut line = format!(
            "{:>4}  {:<NAME_WIDTH$}",
            row.rank,
            truncate_string(item.name(), NAME_WIDTH)
        );
        if with_team {
            let _ = write!(
                line,
                "  {:<TEAM_WIDTH$}  {:<DIVISION_WIDTH$}",
                truncate_string(item.team_name().unwrap_or(""), TEAM_WIDTH),
                truncate_string(item.division_name().unwrap_or(""), DIVISION_WIDTH)
            );
        }
        let _ = write!(line, "  {:>6}  {:>8}", item.total_points(), item.total_attempts());
        let _ = writeln!(out, "{}", line);
    }

    out
}

/// One line per award: title, winners, tie marker and detail.
pub fn awards_list(summaries: &[AwardSummary]) -> String {
    let mut out = String::from("Awards\n");
    for summary in summaries {
        let line = match (&summary.name, &summary.detail) {
            (Some(name), Some(detail)) => {
                let tie = if summary.is_tie { " (tie)" } else { "" };
                format!("  {:<26}{}{} - {}", summary.title, name, tie, detail)
            }
            (Some(name), None) => format!("  {:<26}{}", summary.title, name),
            _ => format!("  {:<26}-", summary.title),
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

pub fn competition_list(comps: &[Competition]) -> String {
    if comps.is_empty() {
        return "No competitions found\n".to_string();
    }
    let mut out = String::new();
    for comp in comps {
        let _ = writeln!(out, "{:<16}{}", comp.comp_id, comp.formatted_date());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use boulderboard_core::{rank_leaderboard, ClimberStats, TeamStats};

    fn climber(name: &str, team: &str, points: u32, attempts: u32) -> ClimberStats {
        ClimberStats {
            climber_id: name.to_lowercase(),
            climber_name: name.to_string(),
            team_id: team.to_lowercase(),
            team_name: team.to_string(),
            division: "Beginner".to_string(),
            total_points: points,
            total_attempts: attempts,
            comp_breakdown: Default::default(),
        }
    }

    #[test]
    fn test_climber_table_columns() {
        let climbers = vec![climber("Bo", "Beta", 50, 3), climber("Amy", "Alpha", 100, 4)];
        let table = leaderboard_table("Climbers", &rank_leaderboard(climbers.iter()));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Climbers");
        assert!(lines[1].contains("Team"));
        assert!(lines[1].contains("Division"));
        assert!(lines[3].trim_start().starts_with("1  Amy"));
        assert!(lines[3].contains("Alpha"));
        assert!(lines[3].ends_with("100         4"));
        assert!(lines[4].trim_start().starts_with("2  Bo"));
    }

    #[test]
    fn test_team_table_has_no_team_column() {
        let teams = vec![TeamStats {
            team_id: "T1".to_string(),
            team_name: "Alpha".to_string(),
            total_points: 150,
            total_attempts: 7,
            climbers: vec!["C1".to_string()],
        }];
        let table = leaderboard_table("Teams", &rank_leaderboard(teams.iter()));
        assert!(!table.contains("Division"));
        assert!(table.contains("Alpha"));
    }

    #[test]
    fn test_long_names_truncated() {
        let climbers = vec![climber("Bartholomew Montgomery-Smythe", "Alpha", 0, 0)];
        let table = leaderboard_table("Climbers", &rank_leaderboard(climbers.iter()));
        assert!(table.contains("Bartholomew Montgomer..."));
    }

    #[test]
    fn test_empty_table() {
        let rows: Vec<Ranked<&ClimberStats>> = Vec::new();
        assert_eq!(leaderboard_table("Climbers", &rows), "Climbers\n  (no entries)\n");
    }

    #[test]
    fn test_awards_list() {
        let summaries = vec![
            AwardSummary {
                title: "Flash Master",
                name: Some("Amy & Bo".to_string()),
                is_tie: true,
                detail: Some("2 flashes".to_string()),
            },
            AwardSummary {
                title: "Zone Hero",
                name: None,
                is_tie: false,
                detail: None,
            },
        ];
        let text = awards_list(&summaries);
        assert!(text.contains("Amy & Bo (tie) - 2 flashes"));
        assert!(text.lines().nth(2).unwrap().trim_end().ends_with('-'));
    }

    #[test]
    fn test_competition_list() {
        let comps = vec![
            Competition {
                comp_id: "comp1".to_string(),
                comp_date: "2024-01-10".to_string(),
            },
            Competition {
                comp_id: "comp2".to_string(),
                comp_date: String::new(),
            },
        ];
        let text = competition_list(&comps);
        assert!(text.contains("Jan 10, 2024"));
        assert!(text.contains("TBD"));
        assert_eq!(competition_list(&[]), "No competitions found\n");
    }
}
