//! Team balancing for a group of four players.
//!
//! Four players can be split into two pairs in exactly three ways. The
//! balancer picks the split with the smallest gap between the two teams'
//! summed ratings. When the group is two men and two women, only the splits
//! that put one of each gender on every team are considered.

use crate::types::{Gender, Player, PlayerId};

/// The three ways to split four players into two pairs, in search order.
const PARTITIONS: [([usize; 2], [usize; 2]); 3] = [
    ([0, 1], [2, 3]),
    ([0, 2], [1, 3]),
    ([0, 3], [1, 2]),
];

/// Two balanced teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub team1: [PlayerId; 2],
    pub team2: [PlayerId; 2],
}

/// Split four players into the two most evenly rated teams.
///
/// Ties go to the first partition in search order, so an evenly rated group
/// keeps its input order: `(0,1)` vs `(2,3)`.
pub fn balance_teams(players: [&Player; 4]) -> Pairing {
    let men = players.iter().filter(|p| p.gender == Gender::Male).count();
    let mixed_only = men == 2;

    let mut best: Option<(f64, &([usize; 2], [usize; 2]))> = None;
    for partition in PARTITIONS.iter() {
        let (a, b) = partition;
        if mixed_only && players[a[0]].gender == players[a[1]].gender {
            continue;
        }

        let gap = (team_rating(&players, a) - team_rating(&players, b)).abs();
        match best {
            Some((best_gap, _)) if gap >= best_gap => {}
            _ => best = Some((gap, partition)),
        }
    }

    // At least one partition always survives the gender filter
    let (a, b) = best.map(|(_, p)| *p).unwrap_or(PARTITIONS[0]);
    Pairing {
        team1: [players[a[0]].id.clone(), players[a[1]].id.clone()],
        team2: [players[b[0]].id.clone(), players[b[1]].id.clone()],
    }
}

fn team_rating(players: &[&Player; 4], team: &[usize; 2]) -> f64 {
    team.iter().map(|&i| players[i].effective_rating()).sum()
}

#[cfg(test)]
#[path = "balance_tests.rs"]
mod balance_tests;
