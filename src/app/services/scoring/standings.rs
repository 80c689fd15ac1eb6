//! Team standings per gender
//!
//! Each team's scores are summed across every event of a gender and teams
//! are placed by competition rank of their total, highest first.

use super::ranking::competition_ranks;
use crate::app::models::{Gender, ResultTree, TeamStanding};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Team standings for every gender in a result tree
pub fn compute_standings(tree: &ResultTree) -> BTreeMap<Gender, Vec<TeamStanding>> {
    tree.iter()
        .map(|(gender, events)| {
            let mut by_team: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
            for (event_id, results) in events {
                for record in &results.event_results {
                    *by_team
                        .entry(record.team_name.clone())
                        .or_default()
                        .entry(event_id.clone())
                        .or_default() += record.score;
                }
            }

            (*gender, rank_teams(by_team))
        })
        .collect()
}

fn rank_teams(by_team: BTreeMap<String, BTreeMap<String, f64>>) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = by_team
        .into_iter()
        .map(|(team, events)| TeamStanding {
            total: events.values().sum(),
            team,
            place: 0,
            events,
        })
        .collect();

    // Team name order breaks ties deterministically
    standings.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

    let totals: Vec<Option<f64>> = standings.iter().map(|s| Some(s.total)).collect();
    for (standing, place) in standings.iter_mut().zip(competition_ranks(&totals)) {
        standing.place = place;
    }

    standings
}
