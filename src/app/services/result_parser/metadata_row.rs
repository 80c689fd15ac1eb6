//! Result-file metadata row
//!
//! Layout: `event_code, round_num, event_name, round_name, status, timing,
//! day_time, conditions, meet_name, meet_dates, meet_year[, location]`.

use crate::app::models::{EventBlockHeader, EventType, Gender, Season};
use crate::app::services::metadata::{
    classify_event, infer_multi_event_gender, infer_season, normalize_round, normalize_status,
    normalize_whitespace, strip_gender_words, strip_leading_zeros,
};
use crate::constants::RESULT_METADATA_MIN_FIELDS;
use crate::{Error, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

const FIELD_NAMES: [&str; 12] = [
    "event_code",
    "round_num",
    "event_name",
    "round_name",
    "status",
    "timing",
    "day_time",
    "conditions",
    "meet_name",
    "meet_dates",
    "meet_year",
    "location",
];

/// Raw metadata fields of a result file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetadata {
    pub event_code: String,
    pub round_num: String,
    pub event_name: String,
    pub round_name: String,
    pub status: String,
    pub timing: String,
    pub day_time: String,
    pub conditions: String,
    pub meet_name: String,
    pub meet_dates: String,
    pub meet_year: String,
    pub location: Option<String>,
}

impl ResultMetadata {
    /// Read the metadata row, failing with the fields parsed so far when short
    pub fn from_record(record: &StringRecord) -> Result<Self> {
        let fields: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();

        if fields.len() < RESULT_METADATA_MIN_FIELDS {
            let parsed: Vec<String> = FIELD_NAMES
                .iter()
                .zip(&fields)
                .map(|(name, value)| format!("{}={:?}", name, value))
                .collect();
            return Err(Error::validation(format!(
                "Metadata row has {} field(s), expected at least {}; parsed: {}",
                fields.len(),
                RESULT_METADATA_MIN_FIELDS,
                parsed.join(", ")
            )));
        }

        let field = |index: usize| fields[index].clone();
        Ok(Self {
            event_code: field(0),
            round_num: field(1),
            event_name: field(2),
            round_name: field(3),
            status: field(4),
            timing: field(5),
            day_time: field(6),
            conditions: field(7),
            meet_name: field(8),
            meet_dates: field(9),
            meet_year: field(10),
            location: fields.get(11).filter(|l| !l.is_empty()).cloned(),
        })
    }

    /// Gender word carried by the event name, if any
    fn gender_word(&self) -> Gender {
        self.event_name
            .split_whitespace()
            .find_map(Gender::from_word)
            .unwrap_or_default()
    }

    /// Derive the event header
    ///
    /// Combined events without a gender word take their gender from the
    /// season; when the season does not decide it the file is rejected.
    pub fn to_header(&self, default_season: Option<Season>) -> Result<EventBlockHeader> {
        let event_name = strip_gender_words(&normalize_whitespace(&self.event_name));
        let season = infer_season(&self.meet_name, &self.meet_dates, default_season);

        let gender = match self.gender_word() {
            Gender::Unknown if classify_event(&event_name) == EventType::Multi => {
                infer_multi_event_gender(&event_name, season).ok_or_else(|| {
                    Error::gender_undetermined(
                        event_name.clone(),
                        season.map(|s| s.as_str()).unwrap_or("unknown"),
                    )
                })?
            }
            gender => gender,
        };

        debug!(
            "Result metadata: event {} '{}' ({}), round '{}', status '{}', season {:?}",
            self.event_code, event_name, gender, self.round_name, self.status, season
        );

        Ok(EventBlockHeader {
            event_num: strip_leading_zeros(&self.event_code),
            event_name,
            gender,
            event_round: Some(normalize_round(&self.round_name)),
            event_status: Some(normalize_status(&self.status)),
            meet_name: Some(self.meet_name.clone()),
            meet_year: Some(self.meet_year.clone()),
            meet_season: season,
        })
    }
}
