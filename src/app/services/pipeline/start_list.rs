//! Start-list pipeline
//!
//! Seeds in a start list become projected places and points per event, and
//! the projected points roll up into team standings.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::app::models::{
    EventDocument, EventKey, EventResults, EventType, Gender, GroupingKey, MeetInfo,
    ResultTree, TeamStanding,
};
use crate::app::services::aggregator::{DocumentKey, ResultTreeBuilder, event_documents};
use crate::app::services::block_parser::{BlockParser, Column, ParseResult, ParseStats, RowSchema};
use crate::app::services::mark_parser::parse_mark;
use crate::app::services::metadata::{
    CombinedEventRow, classify_event, collapse_combined_events, strip_gender_words,
};
use crate::app::services::scoring::{Entrant, EventScorer, compute_standings};
use crate::config::Config;
use crate::{Error, Result};

/// One athlete entry tagged with its block metadata
#[derive(Debug, Clone, PartialEq)]
pub struct StartListRow {
    pub gender: Gender,
    pub event_num: String,
    pub event_name: String,
    pub entrant: Entrant,
    /// Aggregate combined-event points, when the row carries them
    pub points: Option<f64>,
}

impl CombinedEventRow for StartListRow {
    fn gender(&self) -> Gender {
        self.gender
    }

    fn event_name(&self) -> &str {
        &self.event_name
    }

    fn set_event_name(&mut self, event_name: String) {
        self.event_name = event_name;
    }
}

/// Everything produced from one start list
#[derive(Debug, Clone, Serialize)]
pub struct StartListReport {
    pub meet: MeetInfo,
    pub results: ResultTree,
    pub standings: BTreeMap<Gender, Vec<TeamStanding>>,
    pub stats: ParseStats,
    pub combined_rows_dropped: usize,
}

impl StartListReport {
    /// Documents as filed by the storage collaborator
    pub fn documents(&self) -> Vec<(DocumentKey, EventDocument)> {
        event_documents(&self.results)
    }

    pub fn event_count(&self) -> usize {
        self.results.values().map(BTreeMap::len).sum()
    }
}

/// Start-list ingestion
#[derive(Debug, Clone)]
pub struct StartListPipeline {
    parser: BlockParser,
    scorer: EventScorer,
    grouping: GroupingKey,
}

impl StartListPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            parser: BlockParser::new(&config.parsing),
            scorer: EventScorer::new(&config.scoring),
            grouping: config.parsing.grouping,
        }
    }

    /// Process a start-list file for the given meet
    pub fn process_file(&self, path: &Path, meet: MeetInfo) -> Result<StartListReport> {
        let parsed = self.parser.parse_file(path)?;
        self.build(parsed, meet)
    }

    /// Process start-list text from a reader
    pub fn process_reader<R: BufRead>(&self, reader: R, meet: MeetInfo) -> Result<StartListReport> {
        let parsed = self.parser.parse_reader(reader)?;
        self.build(parsed, meet)
    }

    fn build(&self, parsed: ParseResult, meet: MeetInfo) -> Result<StartListReport> {
        let rows = start_list_rows(&parsed);
        let (rows, combined_rows_dropped) = collapse_combined_events(rows);

        let groups = self.group_rows(rows)?;
        let mut builder = ResultTreeBuilder::new(self.grouping);

        for (key, (event_name, entrants)) in groups {
            if key.gender == Gender::Unknown {
                warn!("Event '{}' has no gender word; filed under Unknown", event_name);
            }

            let event_type = classify_event(&event_name);
            let records = self
                .scorer
                .score(&event_name, event_type.merit_direction(), entrants);
            debug!(
                "Scored {} ({}): {} entrants",
                key,
                event_type,
                records.len()
            );

            builder.insert(key, EventResults::scored(event_name, event_type, records))?;
        }

        let results = builder.build();
        let standings = compute_standings(&results);

        let report = StartListReport {
            meet,
            results,
            standings,
            stats: parsed.stats,
            combined_rows_dropped,
        };

        info!(
            "Start list for '{}': {} events, {} entrants, {} combined-event rows collapsed",
            report.meet.name,
            report.event_count(),
            report.stats.data_rows,
            combined_rows_dropped
        );

        Ok(report)
    }

    /// Group rows into scoring groups under the configured key
    ///
    /// Combined events rank on their points column only; a missing total
    /// ranks last.
    fn group_rows(
        &self,
        rows: Vec<StartListRow>,
    ) -> Result<BTreeMap<EventKey, (String, Vec<Entrant>)>> {
        let mut groups: BTreeMap<EventKey, (String, Vec<Entrant>)> = BTreeMap::new();

        for row in rows {
            let display_name = strip_gender_words(&row.event_name);
            let key = match self.grouping {
                GroupingKey::EventName => EventKey::by_name(row.gender, display_name.clone()),
                GroupingKey::EventNumber => EventKey::by_number(row.gender, row.event_num.clone()),
            };

            let is_multi = classify_event(&display_name) == EventType::Multi;
            let entrant = if is_multi {
                row.entrant.with_numeric(row.points)
            } else {
                row.entrant
            };

            let (name, entrants) = groups
                .entry(key.clone())
                .or_insert_with(|| (display_name.clone(), Vec::new()));
            if *name != display_name {
                return Err(Error::ConflictingEvent {
                    key: key.to_string(),
                    existing: name.clone(),
                    incoming: display_name,
                });
            }
            entrants.push(entrant);
        }

        Ok(groups)
    }
}

/// Typed rows of a parsed start list
pub fn start_list_rows(parsed: &ParseResult) -> Vec<StartListRow> {
    let schema = RowSchema::START_LIST;

    parsed
        .rows
        .iter()
        .filter_map(|row| {
            let header = parsed.header_of(row)?;
            let team_abbr = row
                .get(&schema, Column::TeamAbbr)
                .and_then(|abbr| abbr.split_whitespace().next())
                .map(str::to_string);

            let entrant = Entrant::new(
                row.get_or_empty(&schema, Column::FirstName),
                row.get_or_empty(&schema, Column::LastName),
            )
            .with_team(row.get_or_empty(&schema, Column::TeamName), team_abbr)
            .with_athlete_id(row.get(&schema, Column::AthleteId).map(str::to_string))
            .with_mark(row.get(&schema, Column::Mark));

            Some(StartListRow {
                gender: header.gender,
                event_num: header.event_num.clone(),
                event_name: header.event_name.clone(),
                entrant,
                points: parse_mark(row.get(&schema, Column::Points)),
            })
        })
        .collect()
}
