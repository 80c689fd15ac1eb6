//! Test utilities for scoring

use crate::app::services::scoring::Entrant;

mod ranking_tests;

/// Entrant with a team abbreviation derived from the team name
pub fn entrant(first: &str, last: &str, team: &str, mark: Option<&str>) -> Entrant {
    Entrant::new(first, last)
        .with_team(team, Some(team.chars().take(4).collect::<String>().to_uppercase()))
        .with_mark(mark)
}

/// Sum of all scores in a set of records
pub fn total_score(records: &[crate::app::models::ScoredRecord]) -> f64 {
    records.iter().map(|r| r.score).sum()
}
