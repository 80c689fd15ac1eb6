//! Season inference and gender inference for headerless multi-events
//!
//! Result files for combined events often omit the gender word. The season
//! decides which combined event each gender contests: outdoors men run the
//! decathlon and women the heptathlon; indoors men run the heptathlon and
//! women the pentathlon. Every other combination stays unresolved.

use crate::app::models::{Gender, Season};
use crate::constants::MULTI_EVENT_LABELS;
use chrono::{Datelike, Month, NaiveDate};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d.%m.%Y"];

/// Gender implied by a combined event in a given season, if any
pub fn infer_multi_event_gender(event_name: &str, season: Option<Season>) -> Option<Gender> {
    let lower = event_name.to_lowercase();
    let label = MULTI_EVENT_LABELS
        .iter()
        .find(|label| lower.contains(&label.to_lowercase()))?;

    match (season?, *label) {
        (Season::Outdoor, "Decathlon") => Some(Gender::Men),
        (Season::Outdoor, "Heptathlon") => Some(Gender::Women),
        (Season::Indoor, "Heptathlon") => Some(Gender::Men),
        (Season::Indoor, "Pentathlon") => Some(Gender::Women),
        _ => None,
    }
}

/// Season of a meet from its name, then its dates, then the fallback
pub fn infer_season(meet_name: &str, meet_dates: &str, fallback: Option<Season>) -> Option<Season> {
    let name = meet_name.to_lowercase();
    if name.contains("indoor") {
        return Some(Season::Indoor);
    }
    if name.contains("outdoor") {
        return Some(Season::Outdoor);
    }

    meet_month(meet_dates)
        .map(season_for_month)
        .or(fallback)
}

/// Indoor season runs December through March
fn season_for_month(month: u32) -> Season {
    match month {
        12 | 1..=3 => Season::Indoor,
        _ => Season::Outdoor,
    }
}

/// First month named in, or parseable from, a meet-dates string
fn meet_month(meet_dates: &str) -> Option<u32> {
    let trimmed = meet_dates.trim();
    if trimmed.is_empty() {
        return None;
    }

    let named = trimmed
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| token.len() >= 3)
        .find_map(|token| token.parse::<Month>().ok())
        .map(|month| month.number_from_month());
    if named.is_some() {
        return named;
    }

    trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .find_map(|token| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(token, format).ok())
        })
        .map(|date| date.month())
}
