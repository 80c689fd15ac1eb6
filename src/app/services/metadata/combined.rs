//! Combined-event collapsing
//!
//! Start lists publish a decathlon, heptathlon or pentathlon as one block per
//! discipline (`"Dec Men 100 M"`, `"Dec Men Long Jump"`, ...). Only the first
//! sub-event encountered per gender and prefix is kept, renamed to the
//! canonical label; the aggregate lives in the points column, so the other
//! legs are dropped rather than summed.

use crate::app::models::Gender;
use crate::constants::COMBINED_EVENT_PREFIXES;
use std::collections::HashMap;
use tracing::debug;

/// Row that belongs to an event and can be renamed
pub trait CombinedEventRow {
    fn gender(&self) -> Gender;
    fn event_name(&self) -> &str;
    fn set_event_name(&mut self, event_name: String);
}

/// Combined-event prefix and canonical label of a sub-event name
///
/// The first word must start with the prefix and abbreviate the label, so
/// `"Pent"` and `"Penta"` match Pentathlon while `"Penn"` does not. The full
/// label itself is already collapsed and never matches.
pub fn combined_prefix(event_name: &str) -> Option<(&'static str, &'static str)> {
    let first_word = event_name.split_whitespace().next()?;
    COMBINED_EVENT_PREFIXES
        .iter()
        .find(|(prefix, canonical)| {
            first_word.starts_with(prefix)
                && canonical.starts_with(first_word)
                && first_word != *canonical
        })
        .copied()
}

/// First sub-event name seen for each (gender, prefix), in input order
pub fn first_occurrence_index<R: CombinedEventRow>(
    rows: &[R],
) -> HashMap<(Gender, &'static str), String> {
    let mut first_seen = HashMap::new();
    for row in rows {
        if let Some((prefix, _)) = combined_prefix(row.event_name()) {
            first_seen
                .entry((row.gender(), prefix))
                .or_insert_with(|| row.event_name().to_string());
        }
    }
    first_seen
}

/// Keep only the first sub-event of every combined event and rename it
///
/// Returns the surviving rows and the number of dropped sub-event rows.
pub fn collapse_combined_events<R: CombinedEventRow>(rows: Vec<R>) -> (Vec<R>, usize) {
    let first_seen = first_occurrence_index(&rows);
    if first_seen.is_empty() {
        return (rows, 0);
    }

    let input_len = rows.len();
    let mut kept = Vec::with_capacity(input_len);

    for mut row in rows {
        match combined_prefix(row.event_name()) {
            Some((prefix, canonical)) => {
                let is_first = first_seen
                    .get(&(row.gender(), prefix))
                    .is_some_and(|first| first == row.event_name());
                if is_first {
                    row.set_event_name(canonical.to_string());
                    kept.push(row);
                }
            }
            None => kept.push(row),
        }
    }

    let dropped = input_len - kept.len();
    debug!(
        "Collapsed {} combined events, dropped {} sub-event rows",
        first_seen.len(),
        dropped
    );

    (kept, dropped)
}
