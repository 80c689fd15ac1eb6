//! Result tree builder
//!
//! Every event enters the tree under an [`EventKey`]. A tree is keyed either
//! by event name or by event number, never both; two distinct events that
//! resolve to the same key are rejected instead of merged. Re-inserting the
//! same event replaces its earlier results.

use crate::app::models::{EventKey, EventResults, GroupingKey, ResultTree};
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ResultTreeBuilder {
    grouping: GroupingKey,
    tree: ResultTree,
}

impl ResultTreeBuilder {
    pub fn new(grouping: GroupingKey) -> Self {
        Self {
            grouping,
            tree: BTreeMap::new(),
        }
    }

    pub fn grouping(&self) -> GroupingKey {
        self.grouping
    }

    /// Add one scored event
    pub fn insert(&mut self, key: EventKey, event: EventResults) -> Result<()> {
        let found = key.id.grouping();
        if found != self.grouping {
            return Err(Error::MixedGroupingKeys {
                expected: self.grouping.to_string(),
                found: found.to_string(),
            });
        }

        let events = self.tree.entry(key.gender).or_default();
        let id = key.id.as_str().to_string();

        if let Some(existing) = events.get(&id) {
            if existing.event_name != event.event_name {
                return Err(Error::ConflictingEvent {
                    key: key.to_string(),
                    existing: existing.event_name.clone(),
                    incoming: event.event_name,
                });
            }
            warn!("Replacing earlier results for {}", key);
        }

        debug!(
            "Aggregated {} records under {}",
            event.event_results.len(),
            key
        );
        events.insert(id, event);
        Ok(())
    }

    /// Number of events added so far
    pub fn len(&self) -> usize {
        self.tree.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finish the tree with every event's records in place order
    pub fn build(mut self) -> ResultTree {
        for events in self.tree.values_mut() {
            for event in events.values_mut() {
                event.event_results.sort_by_key(|record| record.place);
            }
        }
        self.tree
    }
}
