//! Roster, match and configuration types shared by every generator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque player identity (assigned by whoever owns the roster)
pub type PlayerId = String;

/// Rating assumed for players that never entered one
pub const DEFAULT_RATING: f64 = 3.0;

/// Rounds covered by a fixed pairing pattern
pub const FIXED_PATTERN_ROUNDS: u32 = 4;

/// Most rounds a single schedule may ask for
pub const MAX_ROUNDS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

/// A roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    /// NTRP-style skill rating, only used to balance teams
    #[serde(default)]
    pub rating: Option<f64>,
    pub active: bool,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender,
            rating: None,
            active: true,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Rating used for comparisons. Never written back.
    pub fn effective_rating(&self) -> f64 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }
}

/// Final score of a doubles match, stored as one value so a half-entered
/// result cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub team1: u32,
    pub team2: u32,
}

impl MatchScore {
    pub fn new(team1: u32, team2: u32) -> Self {
        Self { team1, team2 }
    }
}

/// Which side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Team1,
    Team2,
}

/// One doubles match of a KDK schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    /// 1-based round number
    pub round: u32,
    /// 1-based court number
    pub court: u32,
    pub team1: [PlayerId; 2],
    pub team2: [PlayerId; 2],
    /// `None` until the match has been played
    pub score: Option<MatchScore>,
}

impl Match {
    pub fn new(
        id: String,
        round: u32,
        court: u32,
        team1: [PlayerId; 2],
        team2: [PlayerId; 2],
    ) -> Self {
        Self {
            id,
            round,
            court,
            team1,
            team2,
            score: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.score.is_some()
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.team1.iter().chain(self.team2.iter())
    }

    /// Side the player is on, if they take part in this match
    pub fn side_of(&self, player: &str) -> Option<Side> {
        if self.team1.iter().any(|id| id == player) {
            Some(Side::Team1)
        } else if self.team2.iter().any(|id| id == player) {
            Some(Side::Team2)
        } else {
            None
        }
    }
}

/// Schedule configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub courts: u32,
    pub rounds: u32,
    pub mixed_doubles: bool,
    /// Takes priority over `mixed_doubles` when both are set
    pub strict_gender: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            courts: 1,
            rounds: FIXED_PATTERN_ROUNDS,
            mixed_doubles: false,
            strict_gender: false,
        }
    }
}

impl TournamentConfig {
    /// Courts clamped to at least one, rounds to `1..=MAX_ROUNDS`
    pub fn normalized(self) -> Self {
        Self {
            courts: self.courts.max(1),
            rounds: self.rounds.clamp(1, MAX_ROUNDS),
            ..self
        }
    }
}

/// Court number for the `index`-th match of a round, cycling over the courts
pub(crate) fn court_for(index: usize, courts: u32) -> u32 {
    let courts = courts.max(1) as usize;
    (index % courts) as u32 + 1
}

/// Group matches by round number, in ascending round order
pub fn rounds_of(matches: &[Match]) -> BTreeMap<u32, Vec<&Match>> {
    let mut rounds: BTreeMap<u32, Vec<&Match>> = BTreeMap::new();
    for m in matches {
        rounds.entry(m.round).or_default().push(m);
    }
    rounds
}

/// Number of matches that already carry a score
pub fn completed_count(matches: &[Match]) -> usize {
    matches.iter().filter(|m| m.is_completed()).count()
}
