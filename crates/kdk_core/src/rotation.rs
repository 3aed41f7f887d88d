//! Play-count driven round generation for arbitrary roster sizes.
//!
//! Each round the roster is shuffled, then stably sorted by how many
//! matches each player has already been given. Players who have sat out
//! the most rise to the front; the shuffle only decides among equals.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::balance::balance_teams;
use crate::types::{court_for, Match, Player, PlayerId};

/// Matches handed out per player so far.
///
/// Threaded through the generators by value so each step is a pure
/// function of its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayCounts {
    counts: HashMap<PlayerId, u32>,
}

impl PlayCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every appearance in an existing list of matches
    pub fn from_matches(matches: &[Match]) -> Self {
        let mut counts = Self::new();
        for m in matches {
            counts.record(m);
        }
        counts
    }

    pub fn get(&self, player: &str) -> u32 {
        self.counts.get(player).copied().unwrap_or(0)
    }

    pub fn record(&mut self, m: &Match) {
        for id in m.players() {
            *self.counts.entry(id.clone()).or_insert(0) += 1;
        }
    }
}

/// Shuffle, then stable-sort by ascending play count.
///
/// `sort_by_key` is a stable sort, so the shuffled order survives among
/// players with equal counts.
pub fn priority_order<'a, R>(players: &[&'a Player], counts: &PlayCounts, rng: &mut R) -> Vec<&'a Player>
where
    R: Rng + ?Sized,
{
    let mut order = players.to_vec();
    order.shuffle(rng);
    order.sort_by_key(|p| counts.get(&p.id));
    order
}

/// Generate `rounds` rounds, numbered from `first_round`.
///
/// Groups of four are taken from the front of the priority order and
/// balanced into teams; the 1-3 players left over sit the round out.
pub fn rotating_rounds<R>(
    players: &[&Player],
    courts: u32,
    first_round: u32,
    rounds: u32,
    mut counts: PlayCounts,
    rng: &mut R,
) -> (Vec<Match>, PlayCounts)
where
    R: Rng + ?Sized,
{
    let mut matches = Vec::new();

    for round in first_round..first_round.saturating_add(rounds) {
        let order = priority_order(players, &counts, rng);

        for (group, four) in order.chunks_exact(4).enumerate() {
            let pairing = balance_teams([four[0], four[1], four[2], four[3]]);
            let m = Match::new(
                format!("match-gen-{}-{}", round, group),
                round,
                court_for(group, courts),
                pairing.team1,
                pairing.team2,
            );
            counts.record(&m);
            matches.push(m);
        }

        debug!(
            round,
            matches = order.len() / 4,
            sitting_out = order.len() % 4,
            "generated rotating round"
        );
    }

    (matches, counts)
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod rotation_tests;
