//! Mark parsing utilities for seeds, results and personal bests
//!
//! Converts free-text marks into comparable numbers. The same normalization
//! applies to times and to distances/heights; which direction is better is
//! decided by the event classification, never here.

use crate::app::models::EventType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is not part of a signed decimal number
static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d.\-]").unwrap());

/// Parse an optional mark; `None` input or an unparseable mark yields `None`
pub fn parse_mark(value: Option<&str>) -> Option<f64> {
    value.and_then(parse_mark_str)
}

/// Parse a mark such as `"1:02.35"`, `"10.20"`, `"68.76m"` or `"21-06&frac12;"`
pub fn parse_mark_str(value: &str) -> Option<f64> {
    let mark = value.trim().to_lowercase();

    if mark.contains(':') {
        if let Some(seconds) = parse_minutes_seconds(&mark) {
            return Some(seconds);
        }
    }

    if mark.contains('m') || mark.contains("ft") || mark.contains("&frac") {
        let numeric = NON_NUMERIC.replace_all(&mark, "");
        return parse_float(&numeric);
    }

    parse_float(&mark)
}

/// `minutes:seconds` split on the first colon
fn parse_minutes_seconds(mark: &str) -> Option<f64> {
    let (minutes, seconds) = mark.split_once(':')?;
    let minutes = parse_float(minutes)?;
    let seconds = parse_float(seconds)?;
    Some(minutes * 60.0 + seconds)
}

fn parse_float(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

/// Render a numeric mark in the form the parser reads back to the same value
pub fn format_mark(value: f64, event_type: EventType) -> String {
    match event_type {
        EventType::Running | EventType::Relay => format_time(value),
        EventType::Field => format!("{:.2}m", value),
        EventType::Multi => format!("{}", value.round() as i64),
    }
}

/// Seconds as `"S.ss"` below a minute, `"M:SS.ss"` otherwise
pub fn format_time(seconds: f64) -> String {
    if seconds < 60.0 {
        return format!("{:.2}", seconds);
    }

    let hundredths = (seconds * 100.0).round() as i64;
    let minutes = hundredths / 6000;
    let rest = hundredths % 6000;
    format!("{}:{:02}.{:02}", minutes, rest / 100, rest % 100)
}
