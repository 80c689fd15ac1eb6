//! Tests for result row conversion

use super::*;
use crate::app::models::EventType;
use crate::app::services::result_parser::{
    ResultFileParser, entrant_from_result_row, fallback_athlete_id,
};

#[test]
fn test_standard_entrant() {
    let parsed = ResultFileParser::default()
        .parse_reader(create_test_result_file().as_bytes(), "test")
        .unwrap();
    let entrant = entrant_from_result_row(&parsed.rows[0], &parsed.schema, parsed.event_type);

    assert_eq!(entrant.athlete_name, "Ana Lee");
    assert_eq!(entrant.athlete_id.as_deref(), Some("101"));
    assert_eq!(entrant.team_name, "Yale");
    assert_eq!(entrant.team_abbr.as_deref(), Some("YALE"));
    assert_eq!(entrant.mark.as_deref(), Some("11.20"));
    assert_eq!(entrant.numeric, Some(11.20));
}

#[test]
fn test_missing_bib_uses_fallback_id() {
    let parsed = ResultFileParser::default()
        .parse_reader(create_test_result_file().as_bytes(), "test")
        .unwrap();
    let entrant = entrant_from_result_row(&parsed.rows[2], &parsed.schema, parsed.event_type);
    assert_eq!(entrant.athlete_id.as_deref(), Some("cruz-jr-mia-rice"));
}

#[test]
fn test_multi_entrant_ranks_on_points() {
    let content = create_test_multi_file("Outdoor Classic", "Decathlon");
    let parsed = ResultFileParser::default()
        .parse_reader(content.as_bytes(), "multi")
        .unwrap();
    assert_eq!(parsed.event_type, EventType::Multi);

    let entrant = entrant_from_result_row(&parsed.rows[1], &parsed.schema, parsed.event_type);
    assert_eq!(entrant.mark.as_deref(), Some("7950"));
    assert_eq!(entrant.numeric, Some(7950.0));
}

#[test]
fn test_fallback_athlete_id() {
    assert_eq!(fallback_athlete_id("Ana", "Lee", "Yale"), "ana-lee-yale");
    assert_eq!(fallback_athlete_id("Ana", "", "Yale"), "ana-yale");
}
