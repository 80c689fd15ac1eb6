//! Core data structures for track meet processing
//!
//! Defines the gender/season/event classification enums, the per-block event
//! header, event grouping keys, scored records and the nested result tree
//! handed to the storage collaborator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Gender of an event block
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Gender {
    Men,
    Women,
    /// Sentinel for blocks whose description carries no gender word
    #[default]
    Unknown,
}

impl Gender {
    /// Match a literal gender token ("Men" or "Women", case-sensitive)
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "Men" => Some(Gender::Men),
            "Women" => Some(Gender::Women),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Competition season of a meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Indoor,
    Outdoor,
}

impl Season {
    /// Parse a season name, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "indoor" => Some(Season::Indoor),
            "outdoor" => Some(Season::Outdoor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Indoor => "indoor",
            Season::Outdoor => "outdoor",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event classification driving merit direction and relay handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Running,
    Field,
    Relay,
    Multi,
}

impl EventType {
    /// Whether a lower or a higher mark wins this kind of event
    pub fn merit_direction(&self) -> MeritDirection {
        match self {
            EventType::Running | EventType::Relay => MeritDirection::LowerIsBetter,
            EventType::Field | EventType::Multi => MeritDirection::HigherIsBetter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Running => "running",
            EventType::Field => "field",
            EventType::Relay => "relay",
            EventType::Multi => "multi",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether lower (times) or higher (distances, heights, points) marks are better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeritDirection {
    LowerIsBetter,
    HigherIsBetter,
}

impl MeritDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            MeritDirection::LowerIsBetter
        } else {
            MeritDirection::HigherIsBetter
        }
    }

    /// True when ranking sorts marks ascending
    pub fn is_ascending(&self) -> bool {
        matches!(self, MeritDirection::LowerIsBetter)
    }

    /// Whether `candidate` is strictly better than `current`
    pub fn improves(&self, candidate: f64, current: f64) -> bool {
        match self {
            MeritDirection::LowerIsBetter => candidate < current,
            MeritDirection::HigherIsBetter => candidate > current,
        }
    }
}

/// Metadata derived once per event block
///
/// The start-list format fills only the first four fields; the richer
/// event-result format also carries round, status and meet information.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventBlockHeader {
    /// Event number with leading zeros stripped
    pub event_num: String,

    /// Event label, possibly still carrying gender and combined-event prefix words
    pub event_name: String,

    pub gender: Gender,

    /// Normalized round (e.g. "final", "prelims")
    pub event_round: Option<String>,

    /// Normalized status (e.g. "scored", "in-progress")
    pub event_status: Option<String>,

    pub meet_name: Option<String>,

    pub meet_year: Option<String>,

    pub meet_season: Option<Season>,
}

/// Which event identifier a pipeline groups records by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingKey {
    EventName,
    EventNumber,
}

impl fmt::Display for GroupingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingKey::EventName => f.write_str("event name"),
            GroupingKey::EventNumber => f.write_str("event number"),
        }
    }
}

/// Event identifier within one gender
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventId {
    Name(String),
    Number(String),
}

impl EventId {
    pub fn as_str(&self) -> &str {
        match self {
            EventId::Name(name) => name,
            EventId::Number(number) => number,
        }
    }

    pub fn grouping(&self) -> GroupingKey {
        match self {
            EventId::Name(_) => GroupingKey::EventName,
            EventId::Number(_) => GroupingKey::EventNumber,
        }
    }
}

/// Composite key identifying one scoring group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventKey {
    pub gender: Gender,
    pub id: EventId,
}

impl EventKey {
    pub fn by_name(gender: Gender, name: impl Into<String>) -> Self {
        Self {
            gender,
            id: EventId::Name(name.into()),
        }
    }

    pub fn by_number(gender: Gender, number: impl Into<String>) -> Self {
        Self {
            gender,
            id: EventId::Number(number.into()),
        }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.gender, self.id.as_str())
    }
}

/// One athlete or relay team within an event, after scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// Upper-cased team name (the roster name for relays)
    pub team_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_abbr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete_id: Option<String>,

    pub athlete_name: String,

    /// Raw mark as it appeared in the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<String>,

    pub seed_numeric: Option<f64>,

    /// Running season best, only present for result ingestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sb_numeric: Option<f64>,

    pub place: u32,

    pub score: f64,
}

/// Scored results of one event, with the flags needed to re-render them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResults {
    pub event_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_ascending: Option<bool>,

    pub event_results: Vec<ScoredRecord>,
}

impl EventResults {
    /// Scored event carrying its classification and sort direction
    pub fn scored(
        event_name: impl Into<String>,
        event_type: EventType,
        event_results: Vec<ScoredRecord>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            event_type: Some(event_type),
            sort_ascending: Some(event_type.merit_direction().is_ascending()),
            event_results,
        }
    }
}

/// gender → event identifier → event results
pub type ResultTree = BTreeMap<Gender, BTreeMap<String, EventResults>>;

/// Meet identity shared by all documents of one ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetInfo {
    pub name: String,
    /// Slug of the meet name
    pub id: String,
    pub year: String,
}

impl MeetInfo {
    /// Meet identity with the slug of its name as id
    pub fn new(name: impl Into<String>, year: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: crate::app::services::metadata::slugify(&name),
            name,
            year: year.into(),
        }
    }
}

/// Per gender/event document written for a start list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDocument {
    pub gender: Gender,
    pub event_name: String,
    pub projections: Vec<ScoredRecord>,
}

/// Team total across all events of one gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: String,
    pub total: f64,
    pub place: u32,
    pub events: BTreeMap<String, f64>,
}

/// Event document update produced by result ingestion
///
/// Non-scorable statuses produce an update carrying only `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventUpdate {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_ascending: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_results: Option<Vec<ScoredRecord>>,
}

impl EventUpdate {
    /// Update carrying only the status
    pub fn status_only(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            round: None,
            event_name: None,
            event_type: None,
            sort_ascending: None,
            event_results: None,
        }
    }
}

/// Previously persisted event document used to seed season bests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredEventDocument {
    pub event_type: Option<EventType>,
    pub sort_ascending: Option<bool>,
    pub projection: Option<StoredProjection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredProjection {
    pub event_results: Vec<StoredResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredResult {
    pub athlete_id: Option<String>,
    pub sb_numeric: Option<f64>,
}
