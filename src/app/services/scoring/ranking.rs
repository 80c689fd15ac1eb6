//! Merit ordering, competition ranking and the event scorer

use super::deduplication::{DedupeKey, dedupe_entrants};
use super::points::split_points;
use crate::app::models::{MeritDirection, ScoredRecord};
use crate::app::services::mark_parser::parse_mark_str;
use crate::app::services::metadata::is_relay_event;
use crate::config::ScoringConfig;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// One athlete or relay team entered in an event, before scoring
#[derive(Debug, Clone, PartialEq)]
pub struct Entrant {
    pub first_name: String,
    pub last_name: String,
    /// Display name; for relays the roster name that replaces the team
    pub athlete_name: String,
    pub athlete_id: Option<String>,
    pub team_name: String,
    pub team_abbr: Option<String>,
    /// Raw mark from the source row
    pub mark: Option<String>,
    /// Comparable value used for ranking
    pub numeric: Option<f64>,
}

impl Entrant {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let athlete_name = format!("{} {}", first_name, last_name).trim().to_string();
        Self {
            first_name,
            last_name,
            athlete_name,
            athlete_id: None,
            team_name: String::new(),
            team_abbr: None,
            mark: None,
            numeric: None,
        }
    }

    pub fn with_team(mut self, team_name: impl Into<String>, team_abbr: Option<String>) -> Self {
        self.team_name = team_name.into();
        self.team_abbr = team_abbr;
        self
    }

    pub fn with_athlete_id(mut self, athlete_id: Option<String>) -> Self {
        self.athlete_id = athlete_id;
        self
    }

    /// Set the raw mark and its parsed value
    pub fn with_mark(mut self, mark: Option<&str>) -> Self {
        self.numeric = mark.and_then(parse_mark_str);
        self.mark = mark.map(str::to_string);
        self
    }

    /// Override the ranking value (e.g. combined-event points)
    pub fn with_numeric(mut self, numeric: Option<f64>) -> Self {
        self.numeric = numeric;
        self
    }
}

fn merit_order(a: Option<f64>, b: Option<f64>, direction: MeritDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if direction.is_ascending() {
                ordering
            } else {
                ordering.reverse()
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort best-first; unparseable marks go last in either direction
pub fn sort_by_merit(entrants: &mut [Entrant], direction: MeritDirection) {
    entrants.sort_by(|a, b| merit_order(a.numeric, b.numeric, direction));
}

/// Competition ("min") ranks of merit-sorted values
///
/// Equal values share the smallest ordinal of their run, so `[a, a, b]`
/// ranks `[1, 1, 3]`. Missing values tie with each other at the bottom.
pub fn competition_ranks(sorted_values: &[Option<f64>]) -> Vec<u32> {
    let mut ranks: Vec<u32> = Vec::with_capacity(sorted_values.len());
    for (index, value) in sorted_values.iter().enumerate() {
        let rank = match ranks.last() {
            Some(&previous) if sorted_values[index - 1] == *value => previous,
            _ => index as u32 + 1,
        };
        ranks.push(rank);
    }
    ranks
}

/// Scores the entrants of one event
#[derive(Debug, Clone, Default)]
pub struct EventScorer {
    dedupe_key: DedupeKey,
}

impl EventScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        let dedupe_key = if config.dedupe_on_athlete_id {
            DedupeKey::NameTeamAndId
        } else {
            DedupeKey::NameAndTeam
        };
        Self { dedupe_key }
    }

    /// Rank and score one event group, returning records in place order
    ///
    /// Relay events take the roster name as team name; every team name is
    /// then upper-cased and trimmed.
    pub fn score(
        &self,
        event_name: &str,
        direction: MeritDirection,
        mut entrants: Vec<Entrant>,
    ) -> Vec<ScoredRecord> {
        sort_by_merit(&mut entrants, direction);
        let (entrants, dropped) = dedupe_entrants(entrants, self.dedupe_key);
        if dropped > 0 {
            debug!("{}: dropped {} duplicate entrant rows", event_name, dropped);
        }

        let values: Vec<Option<f64>> = entrants.iter().map(|e| e.numeric).collect();
        let places = competition_ranks(&values);

        let mut tie_sizes: HashMap<u32, usize> = HashMap::new();
        for place in &places {
            *tie_sizes.entry(*place).or_default() += 1;
        }

        let relay = is_relay_event(event_name);

        entrants
            .into_iter()
            .zip(places)
            .map(|(entrant, place)| {
                let tied = tie_sizes.get(&place).copied().unwrap_or(1);
                let team_name = if relay {
                    entrant.athlete_name.clone()
                } else {
                    entrant.team_name
                };

                ScoredRecord {
                    team_name: team_name.trim().to_uppercase(),
                    team_abbr: entrant.team_abbr,
                    athlete_id: entrant.athlete_id,
                    athlete_name: entrant.athlete_name,
                    mark: entrant.mark,
                    seed_numeric: entrant.numeric,
                    sb_numeric: None,
                    place,
                    score: split_points(place, tied),
                }
            })
            .collect()
    }
}
