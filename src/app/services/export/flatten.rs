//! Result tree flattening

use crate::app::models::{Gender, ResultTree, TeamStanding};
use crate::Result;
use polars::prelude::{Column, DataFrame};
use std::collections::BTreeMap;

/// One row per scored record, ordered by gender, event and place
pub fn results_frame(tree: &ResultTree) -> Result<DataFrame> {
    let mut gender = Vec::new();
    let mut event_id = Vec::new();
    let mut event_name = Vec::new();
    let mut event_type: Vec<Option<&'static str>> = Vec::new();
    let mut sort_ascending: Vec<Option<bool>> = Vec::new();
    let mut place = Vec::new();
    let mut score = Vec::new();
    let mut athlete_name = Vec::new();
    let mut athlete_id: Vec<Option<String>> = Vec::new();
    let mut team_name = Vec::new();
    let mut team_abbr: Vec<Option<String>> = Vec::new();
    let mut mark: Vec<Option<String>> = Vec::new();
    let mut seed_numeric: Vec<Option<f64>> = Vec::new();
    let mut sb_numeric: Vec<Option<f64>> = Vec::new();

    for (g, events) in tree {
        for (id, event) in events {
            for record in &event.event_results {
                gender.push(g.as_str());
                event_id.push(id.clone());
                event_name.push(event.event_name.clone());
                event_type.push(event.event_type.map(|t| t.as_str()));
                sort_ascending.push(event.sort_ascending);
                place.push(record.place);
                score.push(record.score);
                athlete_name.push(record.athlete_name.clone());
                athlete_id.push(record.athlete_id.clone());
                team_name.push(record.team_name.clone());
                team_abbr.push(record.team_abbr.clone());
                mark.push(record.mark.clone());
                seed_numeric.push(record.seed_numeric);
                sb_numeric.push(record.sb_numeric);
            }
        }
    }

    let frame = DataFrame::new(vec![
        Column::new("gender".into(), gender),
        Column::new("event_id".into(), event_id),
        Column::new("event_name".into(), event_name),
        Column::new("event_type".into(), event_type),
        Column::new("sort_ascending".into(), sort_ascending),
        Column::new("place".into(), place),
        Column::new("score".into(), score),
        Column::new("athlete_name".into(), athlete_name),
        Column::new("athlete_id".into(), athlete_id),
        Column::new("team_name".into(), team_name),
        Column::new("team_abbr".into(), team_abbr),
        Column::new("mark".into(), mark),
        Column::new("seed_numeric".into(), seed_numeric),
        Column::new("sb_numeric".into(), sb_numeric),
    ])?;

    Ok(frame)
}

/// One row per team and gender
pub fn standings_frame(standings: &BTreeMap<Gender, Vec<TeamStanding>>) -> Result<DataFrame> {
    let mut gender = Vec::new();
    let mut place = Vec::new();
    let mut team = Vec::new();
    let mut total = Vec::new();
    let mut events = Vec::new();

    for (g, teams) in standings {
        for standing in teams {
            gender.push(g.as_str());
            place.push(standing.place);
            team.push(standing.team.clone());
            total.push(standing.total);
            events.push(standing.events.len() as u32);
        }
    }

    let frame = DataFrame::new(vec![
        Column::new("gender".into(), gender),
        Column::new("place".into(), place),
        Column::new("team".into(), team),
        Column::new("total".into(), total),
        Column::new("scoring_events".into(), events),
    ])?;

    Ok(frame)
}
