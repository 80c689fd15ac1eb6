//! Test utilities for result tree assembly

use crate::app::models::ScoredRecord;


pub fn record(name: &str, place: u32, score: f64) -> ScoredRecord {
    ScoredRecord {
        team_name: "TEAM".to_string(),
        team_abbr: None,
        athlete_id: None,
        athlete_name: name.to_string(),
        mark: None,
        seed_numeric: None,
        sb_numeric: None,
        place,
        score,
    }
}
