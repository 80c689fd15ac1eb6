//! Text normalization shared by both pipelines
//!
//! `slugify` must stay byte-for-byte compatible with the storage
//! collaborator's lookup keys: lower-case, whitespace/underscore runs to one
//! hyphen, everything outside `[a-z0-9-]` removed.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_]+").unwrap());
static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]").unwrap());
static GENDER_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(Men|Women)\b\s*").unwrap());

/// Storage key for free text
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let hyphenated = SEPARATOR_RUN.replace_all(&lowered, "-");
    NON_SLUG.replace_all(&hyphenated, "").into_owned()
}

/// Remove standalone `Men`/`Women` words from an event label
pub fn strip_gender_words(event_name: &str) -> String {
    GENDER_WORD.replace_all(event_name, "").trim().to_string()
}

/// Any round containing "final" is the final; everything else is slugged as-is
pub fn normalize_round(round: &str) -> String {
    if round.to_lowercase().contains("final") {
        "final".to_string()
    } else {
        slugify(round)
    }
}

/// Any status containing "progress" is in progress; everything else is slugged as-is
pub fn normalize_status(status: &str) -> String {
    if status.to_lowercase().contains("progress") {
        "in-progress".to_string()
    } else {
        slugify(status)
    }
}

/// Event numbers are zero-padded in exports; an all-zero number stays `"0"`
pub fn strip_leading_zeros(value: &str) -> String {
    let trimmed = value.trim();
    let stripped = trimmed.trim_start_matches('0');
    if stripped.is_empty() && !trimmed.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}
