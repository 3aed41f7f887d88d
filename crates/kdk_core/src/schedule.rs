//! Schedule generation entry point.
//!
//! Picks a generator for the active roster and configuration:
//!
//! 1. Fewer than four active players: no matches.
//! 2. Strict gender mode: [`strict_rounds`] for every round.
//! 3. Mixed doubles: [`mixed_rounds`] for every round.
//! 4. 8, 12 or 16 players: the fixed pattern for up to four rounds, then
//!    rotating rounds for any extra rounds.
//! 5. Anything else: rotating rounds from round 1.

use rand::Rng;
use tracing::debug;

use crate::modes::{mixed_rounds, strict_rounds};
use crate::patterns::{fixed_schedule, has_fixed_pattern};
use crate::rotation::{rotating_rounds, PlayCounts};
use crate::types::{Match, Player, TournamentConfig, FIXED_PATTERN_ROUNDS};

/// Generator chosen for a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    NotEnoughPlayers,
    StrictGender,
    MixedDoubles,
    FixedPattern,
    Rotating,
}

/// Which generator `generate_matches_with` will use
pub fn select_strategy(active_players: usize, config: &TournamentConfig) -> Strategy {
    if active_players < 4 {
        Strategy::NotEnoughPlayers
    } else if config.strict_gender {
        Strategy::StrictGender
    } else if config.mixed_doubles {
        Strategy::MixedDoubles
    } else if has_fixed_pattern(active_players) {
        Strategy::FixedPattern
    } else {
        Strategy::Rotating
    }
}

/// Generate the full schedule using the thread-local RNG
pub fn generate_matches(roster: &[Player], config: &TournamentConfig) -> Vec<Match> {
    generate_matches_with(roster, config, &mut rand::thread_rng())
}

/// Generate the full schedule for the active players of `roster`.
///
/// Inactive players are never scheduled. Courts and rounds below one are
/// treated as one.
pub fn generate_matches_with<R>(roster: &[Player], config: &TournamentConfig, rng: &mut R) -> Vec<Match>
where
    R: Rng + ?Sized,
{
    let active: Vec<&Player> = roster.iter().filter(|p| p.active).collect();
    let config = config.normalized();
    let strategy = select_strategy(active.len(), &config);

    debug!(
        players = active.len(),
        courts = config.courts,
        rounds = config.rounds,
        ?strategy,
        "generating schedule"
    );

    let counts = PlayCounts::new();
    match strategy {
        Strategy::NotEnoughPlayers => Vec::new(),
        Strategy::StrictGender => strict_rounds(&active, config.courts, config.rounds, counts, rng).0,
        Strategy::MixedDoubles => mixed_rounds(&active, config.courts, config.rounds, counts, rng).0,
        Strategy::FixedPattern => {
            let mut matches = fixed_schedule(&active, config.courts, config.rounds);
            if config.rounds > FIXED_PATTERN_ROUNDS {
                let counts = PlayCounts::from_matches(&matches);
                let (extra, _) = rotating_rounds(
                    &active,
                    config.courts,
                    FIXED_PATTERN_ROUNDS + 1,
                    config.rounds - FIXED_PATTERN_ROUNDS,
                    counts,
                    rng,
                );
                matches.extend(extra);
            }
            matches
        }
        Strategy::Rotating => rotating_rounds(&active, config.courts, 1, config.rounds, counts, rng).0,
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
