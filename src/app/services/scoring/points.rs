//! Fixed points table with tie splitting

use crate::constants::POINTS_TABLE;

/// Points for a single place; places outside 1..=8 score 0
pub fn points_for_place(place: u32) -> f64 {
    match place {
        1..=8 => POINTS_TABLE[(place - 1) as usize],
        _ => 0.0,
    }
}

/// Points each of `tied` entrants sharing `place` receive
///
/// The group splits the sum of the points for places `place..place + tied`.
/// A group starting beyond eighth place scores nothing.
pub fn split_points(place: u32, tied: usize) -> f64 {
    if tied == 0 || place > POINTS_TABLE.len() as u32 {
        return 0.0;
    }

    let total: f64 = (0..tied as u32)
        .map(|offset| points_for_place(place + offset))
        .sum();
    total / tied as f64
}
