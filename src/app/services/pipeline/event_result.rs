//! Event-result pipeline
//!
//! One result file updates one event document. The normalized status gates
//! the work: statuses outside the accepted set reject the file, accepted but
//! unscored statuses produce a status-only update, and scored statuses rank
//! the rows and fold every mark into the running season bests.

use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::app::models::{
    EventBlockHeader, EventKey, EventResults, EventUpdate, GroupingKey, MeetInfo, ResultTree,
    StoredEventDocument,
};
use crate::app::services::aggregator::{ResultTreeBuilder, event_update};
use crate::app::services::block_parser::ParseStats;
use crate::app::services::result_parser::{
    ParsedResultFile, ResultFileParser, entrant_from_result_row,
};
use crate::app::services::scoring::{
    EventScorer, SeasonBestKey, SeasonBestStore, fold_season_bests, seed_from_document,
};
use crate::config::Config;
use crate::constants::{ACCEPTED_STATUSES, SCORABLE_STATUSES};
use crate::{Error, Result};

/// Outcome of ingesting one result file
#[derive(Debug, Clone, Serialize)]
pub struct EventResultReport {
    pub meet: MeetInfo,
    pub header: EventBlockHeader,
    pub update: EventUpdate,
    /// Empty unless the status was scorable
    pub results: ResultTree,
    pub stats: ParseStats,
}

impl EventResultReport {
    pub fn is_scored(&self) -> bool {
        self.update.event_results.is_some()
    }
}

/// Result ingestion backed by a season-best store
#[derive(Clone)]
pub struct EventResultPipeline {
    parser: ResultFileParser,
    scorer: EventScorer,
    season_bests: Arc<dyn SeasonBestStore>,
}

impl std::fmt::Debug for EventResultPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventResultPipeline")
            .field("parser", &self.parser)
            .field("scorer", &self.scorer)
            .finish_non_exhaustive()
    }
}

/// Reject statuses outside the accepted set
pub fn check_status(status: &str) -> Result<()> {
    if ACCEPTED_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(Error::forbidden_status(status, ACCEPTED_STATUSES))
    }
}

impl EventResultPipeline {
    pub fn new(config: &Config, season_bests: Arc<dyn SeasonBestStore>) -> Self {
        Self {
            parser: ResultFileParser::new(config.scoring.default_season),
            scorer: EventScorer::new(&config.scoring),
            season_bests,
        }
    }

    /// Ingest a result file
    pub fn process_file(
        &self,
        path: &Path,
        stored: Option<&StoredEventDocument>,
    ) -> Result<EventResultReport> {
        let parsed = self.parser.parse_file(path)?;
        self.build(parsed, stored)
    }

    /// Ingest result CSV from a reader; `source` names it in errors
    pub fn process_reader<R: Read>(
        &self,
        reader: R,
        source: &str,
        stored: Option<&StoredEventDocument>,
    ) -> Result<EventResultReport> {
        let parsed = self.parser.parse_reader(reader, source)?;
        self.build(parsed, stored)
    }

    fn build(
        &self,
        parsed: ParsedResultFile,
        stored: Option<&StoredEventDocument>,
    ) -> Result<EventResultReport> {
        let ParsedResultFile {
            metadata,
            header,
            event_type,
            schema,
            rows,
            stats,
        } = parsed;

        let status = header.event_status.clone().unwrap_or_default();
        check_status(&status)?;

        let meet = MeetInfo::new(metadata.meet_name.clone(), metadata.meet_year.clone());

        if !SCORABLE_STATUSES.contains(&status.as_str()) {
            info!(
                "{} {} is '{}'; recording status only",
                header.gender, header.event_name, status
            );
            return Ok(EventResultReport {
                meet,
                header,
                update: EventUpdate::status_only(status),
                results: ResultTree::new(),
                stats,
            });
        }

        let direction = event_type.merit_direction();
        let sb_key = SeasonBestKey::new(meet.id.clone(), header.gender, header.event_num.clone());
        if let Some(document) = stored {
            let seeded = seed_from_document(self.season_bests.as_ref(), &sb_key, document);
            debug!("Seeded {} season bests for {:?}", seeded, sb_key);
        }

        let entrants = rows
            .iter()
            .map(|row| entrant_from_result_row(row, &schema, event_type))
            .collect();
        let mut records = self.scorer.score(&header.event_name, direction, entrants);
        fold_season_bests(&mut records, self.season_bests.as_ref(), &sb_key, direction);

        let key = EventKey::by_number(header.gender, header.event_num.clone());
        let mut builder = ResultTreeBuilder::new(GroupingKey::EventNumber);
        builder.insert(
            key,
            EventResults::scored(header.event_name.clone(), event_type, records.clone()),
        )?;

        info!(
            "Scored {} {} ({}): {} results",
            header.gender,
            header.event_name,
            status,
            records.len()
        );

        let update = event_update(&header, &status, event_type, records);
        Ok(EventResultReport {
            meet,
            header,
            update,
            results: builder.build(),
            stats,
        })
    }
}
