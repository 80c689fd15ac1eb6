//! Tests for merit ordering, ranking and event scoring

use super::{entrant, total_score};
use crate::app::models::MeritDirection;
use crate::app::services::scoring::{Entrant, EventScorer, competition_ranks, sort_by_merit};
use crate::config::ScoringConfig;
use crate::constants::POINTS_TABLE_TOTAL;

#[test]
fn test_competition_ranks() {
    assert_eq!(
        competition_ranks(&[Some(1.0), Some(1.0), Some(2.0), Some(3.0)]),
        vec![1, 1, 3, 4]
    );
    assert_eq!(
        competition_ranks(&[Some(1.0), Some(2.0), Some(2.0), Some(3.0)]),
        vec![1, 2, 2, 4]
    );
    assert_eq!(
        competition_ranks(&[Some(1.0), None, None]),
        vec![1, 2, 2]
    );
    assert!(competition_ranks(&[]).is_empty());
}

#[test]
fn test_sort_lower_is_better_puts_missing_last() {
    let mut entrants = vec![
        entrant("A", "A", "T", Some("DNF")),
        entrant("B", "B", "T", Some("10.50")),
        entrant("C", "C", "T", Some("10.20")),
    ];
    sort_by_merit(&mut entrants, MeritDirection::LowerIsBetter);
    let order: Vec<&str> = entrants.iter().map(|e| e.first_name.as_str()).collect();
    assert_eq!(order, vec!["C", "B", "A"]);
}

#[test]
fn test_sort_higher_is_better_puts_missing_last() {
    let mut entrants = vec![
        entrant("A", "A", "T", None),
        entrant("B", "B", "T", Some("7.10m")),
        entrant("C", "C", "T", Some("7.45m")),
    ];
    sort_by_merit(&mut entrants, MeritDirection::HigherIsBetter);
    let order: Vec<&str> = entrants.iter().map(|e| e.first_name.as_str()).collect();
    assert_eq!(order, vec!["C", "B", "A"]);
}

#[test]
fn test_tied_winners_split_first_and_second() {
    let scorer = EventScorer::default();
    let records = scorer.score(
        "100 M",
        MeritDirection::LowerIsBetter,
        vec![
            entrant("Noah", "Lyles", "Florida", Some("10.20")),
            entrant("Fred", "Kerley", "Texas", Some("10.20")),
            entrant("Erriyon", "Knighton", "Tampa", Some("10.50")),
        ],
    );

    let places: Vec<u32> = records.iter().map(|r| r.place).collect();
    let scores: Vec<f64> = records.iter().map(|r| r.score).collect();
    assert_eq!(places, vec![1, 1, 3]);
    assert_eq!(scores, vec![9.0, 9.0, 6.0]);
}

#[test]
fn test_tie_for_fourth_and_fifth() {
    let marks = ["10.0", "10.1", "10.2", "10.3", "10.3", "10.5"];
    let entrants: Vec<Entrant> = marks
        .iter()
        .enumerate()
        .map(|(i, mark)| entrant(&format!("A{}", i), "X", "Team", Some(mark)))
        .collect();

    let records = EventScorer::default().score("200 M", MeritDirection::LowerIsBetter, entrants);
    assert_eq!(records[3].place, 4);
    assert_eq!(records[4].place, 4);
    assert_eq!(records[3].score, 4.5);
    assert_eq!(records[4].score, 4.5);
    assert_eq!(records[5].place, 6);
    assert_eq!(records[5].score, 3.0);
}

#[test]
fn test_field_event_ranks_highest_first() {
    let records = EventScorer::default().score(
        "Long Jump",
        MeritDirection::HigherIsBetter,
        vec![
            entrant("A", "A", "T1", Some("7.10m")),
            entrant("B", "B", "T2", Some("7.45m")),
            entrant("C", "C", "T3", Some("NM")),
        ],
    );

    assert_eq!(records[0].athlete_name, "B B");
    assert_eq!(records[0].place, 1);
    assert_eq!(records[2].athlete_name, "C C");
    assert_eq!(records[2].place, 3);
    assert_eq!(records[2].seed_numeric, None);
}

#[test]
fn test_score_sum_bounded_by_table() {
    let entrants: Vec<Entrant> = (0..20)
        .map(|i| entrant(&format!("R{}", i), "X", "T", Some(&format!("{}", 10 + i % 3))))
        .collect();
    let records = EventScorer::default().score("400 M", MeritDirection::LowerIsBetter, entrants);
    assert!(total_score(&records) <= POINTS_TABLE_TOTAL + 1e-9);

    let entrants: Vec<Entrant> = (0..12)
        .map(|i| entrant(&format!("S{}", i), "X", "T", Some(&format!("{}", 50 + i))))
        .collect();
    let records = EventScorer::default().score("400 M", MeritDirection::LowerIsBetter, entrants);
    assert!((total_score(&records) - POINTS_TABLE_TOTAL).abs() < 1e-9);
}

#[test]
fn test_duplicates_removed_before_ranking() {
    let records = EventScorer::default().score(
        "800 M",
        MeritDirection::LowerIsBetter,
        vec![
            entrant("Ana", "Lee", "Yale", Some("2:05.00")),
            entrant("Ana", "Lee", "Yale", Some("2:05.00")),
            entrant("Bo", "Kim", "Duke", Some("2:06.00")),
        ],
    );

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].place, 2);
    assert_eq!(records[1].score, 8.0);
}

#[test]
fn test_relay_team_name_comes_from_roster_name() {
    let relay = Entrant::new("Florida", "A")
        .with_team("University of Florida", Some("FLA".to_string()))
        .with_mark(Some("38.90"));

    let records = EventScorer::default().score(
        "4x100 M Relay",
        MeritDirection::LowerIsBetter,
        vec![relay],
    );
    assert_eq!(records[0].team_name, "FLORIDA A");
}

#[test]
fn test_team_names_upper_cased_and_trimmed() {
    let records = EventScorer::default().score(
        "100 M",
        MeritDirection::LowerIsBetter,
        vec![entrant("A", "B", "  Texas A&M ", Some("10.1"))],
    );
    assert_eq!(records[0].team_name, "TEXAS A&M");
}

#[test]
fn test_dedupe_on_athlete_id_config() {
    let config = ScoringConfig {
        dedupe_on_athlete_id: true,
        ..ScoringConfig::default()
    };
    let entrants = vec![
        entrant("Ana", "Lee", "Yale", Some("12.0")).with_athlete_id(Some("1".into())),
        entrant("Ana", "Lee", "Yale", Some("12.1")).with_athlete_id(Some("2".into())),
    ];
    let records = EventScorer::new(&config).score("100 M", MeritDirection::LowerIsBetter, entrants);
    assert_eq!(records.len(), 2);
}

#[test]
fn test_numeric_override_ranks_on_points() {
    let records = EventScorer::default().score(
        "Decathlon",
        MeritDirection::HigherIsBetter,
        vec![
            entrant("A", "A", "T", Some("10.90")).with_numeric(Some(7800.0)),
            entrant("B", "B", "T", Some("10.50")).with_numeric(Some(8100.0)),
        ],
    );
    assert_eq!(records[0].athlete_name, "B B");
    assert_eq!(records[0].seed_numeric, Some(8100.0));
    assert_eq!(records[0].mark.as_deref(), Some("10.50"));
}
