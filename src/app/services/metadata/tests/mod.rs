//! Tests for free-text metadata extraction
//!
//! Shared helpers for building rows that carry gender and event names.

use crate::app::models::Gender;
use crate::app::services::metadata::CombinedEventRow;


/// Minimal row used to exercise combined-event collapsing
#[derive(Debug, Clone, PartialEq)]
pub struct TestRow {
    pub gender: Gender,
    pub event_name: String,
    pub athlete: String,
}

impl TestRow {
    pub fn new(gender: Gender, event_name: &str, athlete: &str) -> Self {
        Self {
            gender,
            event_name: event_name.to_string(),
            athlete: athlete.to_string(),
        }
    }
}

impl CombinedEventRow for TestRow {
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
