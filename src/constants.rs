//! Application constants for the track meet processor
//!
//! This module contains the file-format markers, word lists, points table
//! and status sets used throughout the start-list and result pipelines.

// =============================================================================
// Start-List File Format
// =============================================================================

/// Literal marker that opens a new event block in a start-list export
pub const BLOCK_START_MARKER: &str = ";;StartList";

/// Number of logical header lines per block, including the marker line
pub const HEADER_BLOCK_SIZE: usize = 5;

/// First-field codes marking non-athlete data rows
pub const DEFAULT_SKIP_CODES: &[&str] = &["N", "R"];

/// Event name used when a block header carries an empty description cell
pub const UNKNOWN_EVENT_NAME: &str = "Unknown Event";

/// Filename fragments that mark auxiliary exports which are never ingested
pub const DEFAULT_SKIP_FILENAME_SUBSTRINGS: &[&str] = &["splits"];

/// Accepted input file extensions
pub const INPUT_FILE_EXTENSIONS: &[&str] = &["csv", "txt"];

// =============================================================================
// Free-Text Metadata Words
// =============================================================================

/// Words that end the event label inside a block description cell
pub const PHASE_STOP_WORDS: &[&str] = &["Prelims", "Finals", "Semifinals", "Heats", "Qualifying"];

/// Combined-event sub-event prefixes and the canonical label each collapses to
pub const COMBINED_EVENT_PREFIXES: &[(&str, &str)] = &[
    ("Dec", "Decathlon"),
    ("Hept", "Heptathlon"),
    ("Pen", "Pentathlon"),
];

/// Known multi-event labels
pub const MULTI_EVENT_LABELS: &[&str] = &["Decathlon", "Heptathlon", "Pentathlon"];

/// Known field-event labels (higher mark is better)
pub const FIELD_EVENT_LABELS: &[&str] = &[
    "Weight",
    "Hammer",
    "Pole Vault",
    "Javelin",
    "Long Jump",
    "Shot Put",
    "Discus",
    "High Jump",
    "Triple Jump",
];

/// Lower-cased fragments that mark a relay event
pub const RELAY_EVENT_MARKERS: &[&str] = &["relay", "medley", "dmr"];

// =============================================================================
// Scoring
// =============================================================================

/// Points awarded for places 1 through 8; places beyond score 0
pub const POINTS_TABLE: [f64; 8] = [10.0, 8.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];

/// Sum of the full points table
pub const POINTS_TABLE_TOTAL: f64 = 39.0;

// =============================================================================
// Event Result Status
// =============================================================================

/// Normalized statuses accepted by result ingestion
pub const ACCEPTED_STATUSES: &[&str] = &[
    "complete",
    "official",
    "scored",
    "scored-protest",
    "scored-under-review",
    "in-progress",
    "scheduled",
];

/// Normalized statuses that trigger scoring with season-best folding
pub const SCORABLE_STATUSES: &[&str] = &["scored", "scored-protest", "scored-under-review"];

/// Minimum number of fields in a result file's metadata row
pub const RESULT_METADATA_MIN_FIELDS: usize = 11;

// =============================================================================
// Configuration
// =============================================================================

/// Application name used for config directories
pub const APP_NAME: &str = "trackmeet-processor";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TRACKMEET_";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
