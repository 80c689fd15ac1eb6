//! Result rows as scoring entrants

use crate::app::models::EventType;
use crate::app::services::block_parser::{AthleteRow, Column, RowSchema};
use crate::app::services::metadata::slugify;
use crate::app::services::scoring::Entrant;

/// Stable id for athletes without a bib: slug of name and team
pub fn fallback_athlete_id(first_name: &str, last_name: &str, team: &str) -> String {
    slugify(&format!("{} {} {}", first_name, last_name, team))
}

/// Build an entrant from a result row
///
/// Combined events rank on their points column, everything else on the
/// result column.
pub fn entrant_from_result_row(row: &AthleteRow, schema: &RowSchema, event_type: EventType) -> Entrant {
    let first = row.get_or_empty(schema, Column::FirstName);
    let last = row.get_or_empty(schema, Column::LastName);
    let team = row.get_or_empty(schema, Column::TeamName);

    let athlete_id = row
        .get(schema, Column::AthleteId)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_athlete_id(first, last, team));

    let mark_column = if event_type == EventType::Multi {
        Column::Points
    } else {
        Column::Mark
    };

    Entrant::new(first, last)
        .with_team(team, row.get(schema, Column::TeamAbbr).map(str::to_string))
        .with_athlete_id(Some(athlete_id))
        .with_mark(row.get(schema, mark_column))
}
