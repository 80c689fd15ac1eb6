//! Test utilities for flat export

use crate::app::models::{EventResults, EventType, Gender, ResultTree, ScoredRecord};
use std::collections::BTreeMap;


pub fn sample_tree() -> ResultTree {
    let record = |name: &str, team: &str, place: u32, score: f64, seed: Option<f64>| ScoredRecord {
        team_name: team.to_string(),
        team_abbr: Some(team[..3].to_string()),
        athlete_id: None,
        athlete_name: name.to_string(),
        mark: seed.map(|s| format!("{:.2}", s)),
        seed_numeric: seed,
        sb_numeric: None,
        place,
        score,
    };

    let mut men = BTreeMap::new();
    men.insert(
        "100 M".to_string(),
        EventResults::scored(
            "100 M",
            EventType::Running,
            vec![
                record("Noah Lyles", "FLORIDA", 1, 10.0, Some(10.05)),
                record("Fred Kerley", "TEXAS", 2, 8.0, None),
            ],
        ),
    );

    let mut women = BTreeMap::new();
    women.insert(
        "Long Jump".to_string(),
        EventResults::scored(
            "Long Jump",
            EventType::Field,
            vec![record("Tara Davis", "TEXAS", 1, 10.0, Some(7.14))],
        ),
    );

    let mut tree = ResultTree::new();
    tree.insert(Gender::Men, men);
    tree.insert(Gender::Women, women);
    tree
}
