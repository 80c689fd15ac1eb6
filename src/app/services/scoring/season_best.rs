//! Running season-best store
//!
//! A season best only ever improves: each new mark is compared with the
//! stored best under the event's merit direction and replaces it only when
//! strictly better. Updates are a single read-modify-write under one lock so
//! that a prelim and a final of the same event ingested concurrently cannot
//! lose each other's marks.

use crate::app::models::{Gender, MeritDirection, ScoredRecord, StoredEventDocument};
use crate::app::services::metadata::slugify;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// Event a season best belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeasonBestKey {
    pub meet_id: String,
    /// Slug of the gender
    pub gender: String,
    /// Event identifier as grouped by the pipeline
    pub event: String,
}

impl SeasonBestKey {
    pub fn new(meet_id: impl Into<String>, gender: Gender, event: impl Into<String>) -> Self {
        Self {
            meet_id: meet_id.into(),
            gender: slugify(gender.as_str()),
            event: event.into(),
        }
    }
}

/// Storage of per-athlete running bests
pub trait SeasonBestStore: Send + Sync {
    /// Current best, if any
    fn get(&self, key: &SeasonBestKey, athlete_id: &str) -> Option<f64>;

    /// Fold `mark` into the stored best and return the resulting best
    fn update(
        &self,
        key: &SeasonBestKey,
        athlete_id: &str,
        mark: f64,
        direction: MeritDirection,
    ) -> f64;
}

/// One persisted season best
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SeasonBestEntry {
    #[serde(flatten)]
    key: SeasonBestKey,
    athlete_id: String,
    sb_numeric: f64,
}

/// Mutex-guarded in-memory store, optionally persisted as JSON
#[derive(Debug, Default)]
pub struct InMemorySeasonBestStore {
    bests: Mutex<HashMap<(SeasonBestKey, String), f64>>,
}

impl InMemorySeasonBestStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(SeasonBestKey, String), f64>> {
        // A panicked writer leaves a complete map behind; keep using it
        self.bests.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Load a store saved with [`save`](Self::save); a missing file is an empty store
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No season-best store at {}, starting empty", path.display());
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read season bests {}", path.display()), e)
        })?;
        let entries: Vec<SeasonBestEntry> = serde_json::from_str(&content)?;

        let bests = entries
            .into_iter()
            .map(|entry| ((entry.key, entry.athlete_id), entry.sb_numeric))
            .collect::<HashMap<_, _>>();

        info!("Loaded {} season bests from {}", bests.len(), path.display());
        Ok(Self {
            bests: Mutex::new(bests),
        })
    }

    /// Write all season bests as a JSON array, sorted for stable diffs
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut entries: Vec<SeasonBestEntry> = self
            .lock()
            .iter()
            .map(|((key, athlete_id), sb)| SeasonBestEntry {
                key: key.clone(),
                athlete_id: athlete_id.clone(),
                sb_numeric: *sb,
            })
            .collect();
        entries.sort_by(|a, b| (&a.key, &a.athlete_id).cmp(&(&b.key, &b.athlete_id)));

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(format!("Failed to create {}", parent.display()), e)
            })?;
        }

        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(path, json).map_err(|e| {
            Error::io(format!("Failed to write season bests {}", path.display()), e)
        })?;

        debug!("Saved {} season bests to {}", entries.len(), path.display());
        Ok(())
    }
}

impl SeasonBestStore for InMemorySeasonBestStore {
    fn get(&self, key: &SeasonBestKey, athlete_id: &str) -> Option<f64> {
        self.lock()
            .get(&(key.clone(), athlete_id.to_string()))
            .copied()
    }

    fn update(
        &self,
        key: &SeasonBestKey,
        athlete_id: &str,
        mark: f64,
        direction: MeritDirection,
    ) -> f64 {
        let mut bests = self.lock();
        let best = bests
            .entry((key.clone(), athlete_id.to_string()))
            .or_insert(mark);
        if direction.improves(mark, *best) {
            *best = mark;
        }
        *best
    }
}

/// Merit direction recorded on a stored document
fn document_direction(document: &StoredEventDocument) -> Option<MeritDirection> {
    document
        .sort_ascending
        .map(MeritDirection::from_ascending)
        .or_else(|| document.event_type.map(|event_type| event_type.merit_direction()))
}

/// Fold a previously persisted event document into the store
///
/// Returns how many season bests were seeded. Documents without a merit
/// direction cannot be compared and seed nothing.
pub fn seed_from_document(
    store: &dyn SeasonBestStore,
    key: &SeasonBestKey,
    document: &StoredEventDocument,
) -> usize {
    let Some(direction) = document_direction(document) else {
        debug!("Stored document for {:?} has no merit direction", key);
        return 0;
    };

    let Some(projection) = &document.projection else {
        return 0;
    };

    projection
        .event_results
        .iter()
        .filter_map(|result| Some((result.athlete_id.as_deref()?, result.sb_numeric?)))
        .map(|(athlete_id, sb)| store.update(key, athlete_id, sb, direction))
        .count()
}

/// Record each athlete's new mark and attach the running best
pub fn fold_season_bests(
    records: &mut [ScoredRecord],
    store: &dyn SeasonBestStore,
    key: &SeasonBestKey,
    direction: MeritDirection,
) {
    for record in records.iter_mut() {
        let Some(athlete_id) = record.athlete_id.as_deref() else {
            continue;
        };
        record.sb_numeric = match record.seed_numeric {
            Some(mark) => Some(store.update(key, athlete_id, mark, direction)),
            None => store.get(key, athlete_id),
        };
    }
}
