//! Duplicate entrant removal
//!
//! Redundant list entries show up as repeated rows for the same athlete.
//! Entrants are matched on first name, last name and team abbreviation; the
//! athlete id only participates when explicitly requested, since names alone
//! can merge same-named athletes and ids alone can split relay composites.

use super::ranking::Entrant;
use std::collections::HashSet;

/// Fields that identify an entrant for de-duplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupeKey {
    /// First name, last name, team abbreviation
    #[default]
    NameAndTeam,
    /// Name and team plus athlete id
    NameTeamAndId,
}

type Identity = (String, String, String, Option<String>);

fn identity(entrant: &Entrant, key: DedupeKey) -> Identity {
    let id = match key {
        DedupeKey::NameAndTeam => None,
        DedupeKey::NameTeamAndId => entrant.athlete_id.clone(),
    };
    (
        entrant.first_name.clone(),
        entrant.last_name.clone(),
        entrant.team_abbr.clone().unwrap_or_default(),
        id,
    )
}

/// Keep the first occurrence of every entrant, preserving order
///
/// Returns the retained entrants and how many rows were dropped.
pub fn dedupe_entrants(entrants: Vec<Entrant>, key: DedupeKey) -> (Vec<Entrant>, usize) {
    let before = entrants.len();
    let mut seen: HashSet<Identity> = HashSet::with_capacity(before);
    let kept: Vec<Entrant> = entrants
        .into_iter()
        .filter(|entrant| seen.insert(identity(entrant, key)))
        .collect();

    let dropped = before - kept.len();
    (kept, dropped)
}
