//! Hand-built four-round schedules for 8, 12 and 16 players.
//!
//! Each table lists matches as `[[a, b], [c, d]]` indices into the active
//! roster, round after round. A round holds `players / 4` matches and every
//! player appears exactly once per round, so partners and opponents rotate
//! as widely as four rounds allow.

use crate::types::{court_for, Match, Player, FIXED_PATTERN_ROUNDS};

type Table = &'static [[[usize; 2]; 2]];

const EIGHT: Table = &[
    // Round 1
    [[0, 1], [2, 3]],
    [[4, 5], [6, 7]],
    // Round 2
    [[0, 4], [2, 6]],
    [[1, 5], [3, 7]],
    // Round 3
    [[0, 2], [5, 7]],
    [[1, 3], [4, 6]],
    // Round 4
    [[0, 7], [3, 6]],
    [[1, 4], [2, 5]],
];

const TWELVE: Table = &[
    // Round 1
    [[0, 1], [2, 3]],
    [[4, 5], [6, 7]],
    [[8, 9], [10, 11]],
    // Round 2
    [[0, 4], [2, 6]],
    [[1, 5], [3, 7]],
    [[8, 10], [9, 11]],
    // Round 3
    [[0, 8], [2, 9]],
    [[1, 6], [3, 10]],
    [[4, 7], [5, 11]],
    // Round 4
    [[0, 2], [1, 3]],
    [[4, 6], [5, 7]],
    [[8, 11], [9, 10]],
];

const SIXTEEN: Table = &[
    // Round 1
    [[0, 1], [2, 3]],
    [[4, 5], [6, 7]],
    [[8, 9], [10, 11]],
    [[12, 13], [14, 15]],
    // Round 2
    [[0, 4], [8, 12]],
    [[1, 5], [9, 13]],
    [[2, 6], [10, 14]],
    [[3, 7], [11, 15]],
    // Round 3
    [[0, 2], [5, 7]],
    [[1, 3], [4, 6]],
    [[8, 10], [13, 15]],
    [[9, 11], [12, 14]],
    // Round 4
    [[0, 8], [1, 9]],
    [[2, 10], [3, 11]],
    [[4, 12], [5, 13]],
    [[6, 14], [7, 15]],
];

/// Table for a roster size, if one exists
fn table_for(player_count: usize) -> Option<Table> {
    match player_count {
        8 => Some(EIGHT),
        12 => Some(TWELVE),
        16 => Some(SIXTEEN),
        _ => None,
    }
}

/// Whether a fixed pattern covers this many active players
pub fn has_fixed_pattern(player_count: usize) -> bool {
    table_for(player_count).is_some()
}

/// Build the fixed schedule for `players` (in the order given).
///
/// Only rounds `1..=rounds` are emitted, capped at four. Courts cycle within
/// a round, so a round may reuse a court when there are fewer courts than
/// matches. Returns an empty list for roster sizes without a table.
pub fn fixed_schedule(players: &[&Player], courts: u32, rounds: u32) -> Vec<Match> {
    let Some(table) = table_for(players.len()) else {
        return Vec::new();
    };

    let per_round = players.len() / 4;
    let rounds = rounds.min(FIXED_PATTERN_ROUNDS);

    table
        .iter()
        .enumerate()
        .map(|(index, [t1, t2])| (index, (index / per_round) as u32 + 1, t1, t2))
        .take_while(|&(_, round, _, _)| round <= rounds)
        .map(|(index, round, t1, t2)| {
            Match::new(
                format!("match-{}-{}", players.len(), index),
                round,
                court_for(index % per_round, courts),
                [players[t1[0]].id.clone(), players[t1[1]].id.clone()],
                [players[t2[0]].id.clone(), players[t2[1]].id.clone()],
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod patterns_tests;
