//! Event type classification
//!
//! Classification order matters: a multi-event label wins over a field
//! label, and a field label over the relay markers.

use crate::app::models::EventType;
use crate::constants::{FIELD_EVENT_LABELS, MULTI_EVENT_LABELS, RELAY_EVENT_MARKERS};

/// Classify an event by its (gender-stripped) name
pub fn classify_event(event_name: &str) -> EventType {
    let lower = event_name.to_lowercase();
    let mentions = |labels: &[&str]| {
        labels
            .iter()
            .any(|label| lower.contains(&label.to_lowercase()))
    };

    if mentions(MULTI_EVENT_LABELS) {
        EventType::Multi
    } else if mentions(FIELD_EVENT_LABELS) {
        EventType::Field
    } else if is_relay_event(event_name) {
        EventType::Relay
    } else {
        EventType::Running
    }
}

/// Relay or medley events record teams, not individuals
pub fn is_relay_event(event_name: &str) -> bool {
    let lower = event_name.to_lowercase();
    RELAY_EVENT_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}
