//! Gender-aware round generators.
//!
//! * Mixed doubles: every team is a man and a woman where the roster allows
//!   it; leftovers are grouped without a gender constraint.
//! * Strict gender: every match is men's, women's or mixed doubles, never a
//!   same-gender team against a mixed or opposite-gender team.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::balance::balance_teams;
use crate::rotation::{priority_order, PlayCounts};
use crate::types::{court_for, Gender, Match, Player};

/// Kind of match the strict generator can form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Mixed,
    SameGender(Gender),
}

fn split_by_gender<'a>(players: &[&'a Player]) -> (Vec<&'a Player>, Vec<&'a Player>) {
    players.iter().copied().partition(|p| p.gender == Gender::Male)
}

/// Mixed-doubles rounds, numbered from 1.
///
/// Teams come out as `(man, woman)` vs `(man, woman)` in priority order and
/// are not rating balanced.
pub fn mixed_rounds<R>(
    players: &[&Player],
    courts: u32,
    rounds: u32,
    mut counts: PlayCounts,
    rng: &mut R,
) -> (Vec<Match>, PlayCounts)
where
    R: Rng + ?Sized,
{
    let (men, women) = split_by_gender(players);
    let quota = players.len() / 4;
    let mut matches = Vec::new();

    for round in 1..=rounds {
        let men = priority_order(&men, &counts, rng);
        let women = priority_order(&women, &counts, rng);

        let mut groups: Vec<[&Player; 4]> = Vec::with_capacity(quota);
        let mut taken = 0;
        while groups.len() < quota && taken + 2 <= men.len() && taken + 2 <= women.len() {
            groups.push([men[taken], women[taken], men[taken + 1], women[taken + 1]]);
            taken += 2;
        }

        let leftovers: Vec<&Player> = men[taken..]
            .iter()
            .chain(women[taken..].iter())
            .copied()
            .collect();
        for four in leftovers.chunks_exact(4) {
            if groups.len() >= quota {
                break;
            }
            groups.push([four[0], four[1], four[2], four[3]]);
        }

        for (k, [a, b, c, d]) in groups.iter().enumerate() {
            let m = Match::new(
                format!("match-mixed-{}-{}", round, k),
                round,
                court_for(k, courts),
                [a.id.clone(), b.id.clone()],
                [c.id.clone(), d.id.clone()],
            );
            counts.record(&m);
            matches.push(m);
        }

        debug!(round, matches = groups.len(), "generated mixed doubles round");
    }

    (matches, counts)
}

/// Strict-gender rounds, numbered from 1.
///
/// Each match is started by the highest-priority player who can still play.
/// When several match kinds are possible one is picked at random. The four
/// players are then drawn from the heads of the per-gender priority lists.
/// A round ends early once nobody left can form a legal match.
pub fn strict_rounds<R>(
    players: &[&Player],
    courts: u32,
    rounds: u32,
    mut counts: PlayCounts,
    rng: &mut R,
) -> (Vec<Match>, PlayCounts)
where
    R: Rng + ?Sized,
{
    let (men, women) = split_by_gender(players);
    let cap = players.len() / 4;
    let mut matches = Vec::new();

    for round in 1..=rounds {
        let scan = priority_order(players, &counts, rng);
        let men = priority_order(&men, &counts, rng);
        let women = priority_order(&women, &counts, rng);

        let mut used: HashSet<&str> = HashSet::new();
        let mut formed = 0;

        while formed < cap {
            let free_men = count_free(&men, &used);
            let free_women = count_free(&women, &used);

            let starter = scan
                .iter()
                .filter(|p| !used.contains(p.id.as_str()))
                .map(|p| feasible_kinds(p.gender, free_men, free_women))
                .find(|kinds| !kinds.is_empty());

            let Some(kinds) = starter else {
                let sitting_out = players.len() - used.len();
                if sitting_out >= 4 {
                    warn!(round, sitting_out, "strict gender round ended early");
                }
                break;
            };
            let Some(&kind) = kinds.choose(rng) else {
                break;
            };

            let four = match kind {
                MatchKind::Mixed => {
                    let mut picked = take_free(&men, &used, 2);
                    picked.extend(take_free(&women, &used, 2));
                    picked
                }
                MatchKind::SameGender(Gender::Male) => take_free(&men, &used, 4),
                MatchKind::SameGender(Gender::Female) => take_free(&women, &used, 4),
            };
            let &[a, b, c, d] = four.as_slice() else {
                break;
            };

            let pairing = balance_teams([a, b, c, d]);
            let m = Match::new(
                format!("match-strict-{}-{}", round, formed),
                round,
                court_for(formed, courts),
                pairing.team1,
                pairing.team2,
            );
            for p in [a, b, c, d] {
                used.insert(p.id.as_str());
            }
            counts.record(&m);
            matches.push(m);
            formed += 1;
        }

        debug!(round, matches = formed, "generated strict gender round");
    }

    (matches, counts)
}

/// Match kinds a player of `gender` could start with the players still free
pub fn feasible_kinds(gender: Gender, free_men: usize, free_women: usize) -> Vec<MatchKind> {
    let mut kinds = Vec::with_capacity(2);
    if free_men >= 2 && free_women >= 2 {
        kinds.push(MatchKind::Mixed);
    }
    let same = match gender {
        Gender::Male => free_men,
        Gender::Female => free_women,
    };
    if same >= 4 {
        kinds.push(MatchKind::SameGender(gender));
    }
    kinds
}

fn count_free(list: &[&Player], used: &HashSet<&str>) -> usize {
    list.iter().filter(|p| !used.contains(p.id.as_str())).count()
}

fn take_free<'a>(list: &[&'a Player], used: &HashSet<&str>, n: usize) -> Vec<&'a Player> {
    list.iter()
        .filter(|p| !used.contains(p.id.as_str()))
        .take(n)
        .copied()
        .collect()
}

#[cfg(test)]
#[path = "modes_tests.rs"]
mod modes_tests;
