//! Gender and event-label extraction from a block description cell
//!
//! The description cell of a start-list block reads like
//! `"Dec Men 100 M Heats 10:30 AM"`: optional combined-event prefix words,
//! the gender word, the event label, then scheduling text. The label is
//! everything from the start of the cell through the gender word, followed
//! by the words after it up to the first phase word or clock time.

use crate::app::models::Gender;
use crate::constants::{PHASE_STOP_WORDS, UNKNOWN_EVENT_NAME};
use once_cell::sync::Lazy;
use regex::Regex;

/// Clock time at the start of a word (`9:30`, `10:45AM`)
static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}").unwrap());

/// Gender and event label recovered from one description cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionMetadata {
    pub gender: Gender,
    pub event_name: String,
}

/// Collapse whitespace runs to single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True for words that end the event label
pub fn is_stop_word(word: &str) -> bool {
    PHASE_STOP_WORDS.contains(&word) || CLOCK_TIME.is_match(word)
}

/// Extract gender and event label from a description cell
///
/// The first `Men`/`Women` token wins. Without one the gender is `Unknown`
/// and the whole (whitespace-normalized) cell is the label; an empty cell
/// yields `"Unknown Event"`.
pub fn extract_description(cell: &str) -> DescriptionMetadata {
    let normalized = normalize_whitespace(cell);
    if normalized.is_empty() {
        return DescriptionMetadata {
            gender: Gender::Unknown,
            event_name: UNKNOWN_EVENT_NAME.to_string(),
        };
    }

    let words: Vec<&str> = normalized.split(' ').collect();
    let gender_hit = words
        .iter()
        .enumerate()
        .find_map(|(index, word)| Gender::from_word(word).map(|gender| (index, gender)));

    match gender_hit {
        Some((gender_index, gender)) => {
            let mut label: Vec<&str> = words[..=gender_index].to_vec();
            label.extend(
                words[gender_index + 1..]
                    .iter()
                    .copied()
                    .take_while(|word| !is_stop_word(word)),
            );

            DescriptionMetadata {
                gender,
                event_name: label.join(" "),
            }
        }
        None => DescriptionMetadata {
            gender: Gender::Unknown,
            event_name: normalized,
        },
    }
}
