//! Metadata extraction from free-text header cells
//!
//! Recovers gender, event label, round, status and season from the loosely
//! structured description text that timing software writes into block and
//! file headers.
//!
//! ## Architecture
//!
//! - [`description`] - Word-scan extraction of gender and event label
//! - [`combined`] - Collapsing of combined-event sub-events to one entry
//! - [`classify`] - Event type classification (running/field/relay/multi)
//! - [`normalize`] - Slugs, gender-word stripping, round/status normalization
//! - [`season`] - Season inference and headerless multi-event gender inference

pub mod classify;
pub mod combined;
pub mod description;
pub mod normalize;
pub mod season;

#[cfg(test)]
pub mod tests;

pub use classify::{classify_event, is_relay_event};
pub use combined::{CombinedEventRow, collapse_combined_events, combined_prefix};
pub use description::{DescriptionMetadata, extract_description, normalize_whitespace};
pub use normalize::{
    normalize_round, normalize_status, slugify, strip_gender_words, strip_leading_zeros,
};
pub use season::{infer_multi_event_gender, infer_season};
