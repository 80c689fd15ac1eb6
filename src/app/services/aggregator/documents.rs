//! Storage-shaped documents
//!
//! The storage collaborator files start-list events under
//! `meet / slug(gender) / slug(event_name)`; result ingestion produces an
//! update for one event document.

use crate::app::models::{
    EventBlockHeader, EventDocument, EventType, EventUpdate, ResultTree, ScoredRecord,
};
use crate::app::services::metadata::slugify;
use serde::{Deserialize, Serialize};

/// Slug path of an event document below its meet
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    pub gender: String,
    pub event: String,
}

/// One document per gender and event of a result tree
pub fn event_documents(tree: &ResultTree) -> Vec<(DocumentKey, EventDocument)> {
    tree.iter()
        .flat_map(|(gender, events)| {
            events.values().map(move |event| {
                let key = DocumentKey {
                    gender: slugify(gender.as_str()),
                    event: slugify(&event.event_name),
                };
                let document = EventDocument {
                    gender: *gender,
                    event_name: event.event_name.clone(),
                    projections: event.event_results.clone(),
                };
                (key, document)
            })
        })
        .collect()
}

/// Full update for a scored result file
pub fn event_update(
    header: &EventBlockHeader,
    status: &str,
    event_type: EventType,
    records: Vec<ScoredRecord>,
) -> EventUpdate {
    EventUpdate {
        status: status.to_string(),
        round: header.event_round.clone(),
        event_name: Some(header.event_name.clone()),
        event_type: Some(event_type),
        sort_ascending: Some(event_type.merit_direction().is_ascending()),
        event_results: Some(records),
    }
}
