//! Single-elimination brackets.
//!
//! The whole tree is built when the bracket starts. Each non-final match
//! stores the id of the match its winner advances into, so the state is
//! plain acyclic data. Every score report returns a new state.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{MatchScore, Side};

/// Bracket sizes that can be started
pub const BRACKET_SIZES: [u32; 4] = [4, 8, 16, 32];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket size {0} is not one of 4, 8, 16 or 32")]
    InvalidSize(u32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketFormat {
    Singles,
    #[default]
    Doubles,
}

impl BracketFormat {
    pub fn team_size(self) -> usize {
        match self {
            BracketFormat::Singles => 1,
            BracketFormat::Doubles => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketStatus {
    #[default]
    Setup,
    InProgress,
    Completed,
}

/// A player entered in the bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: String,
    pub name: String,
}

impl Entrant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One or two entrants, depending on the format
pub type BracketTeam = Vec<Entrant>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: String,
    /// Entrants left in this round ("round of N")
    pub round_of: u32,
    /// Index within the round
    pub match_number: usize,
    pub team1: BracketTeam,
    pub team2: BracketTeam,
    pub score: Option<MatchScore>,
    pub winner: Option<Side>,
    /// Where the winner goes; `None` for the final
    pub next_match_id: Option<String>,
}

impl BracketMatch {
    pub fn winning_team(&self) -> Option<&BracketTeam> {
        self.winner.map(|side| match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        })
    }

    /// Slot this match's winner fills in the next round
    pub fn feeds_into(&self) -> Side {
        if self.match_number % 2 == 0 {
            Side::Team1
        } else {
            Side::Team2
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketRound {
    pub round_of: u32,
    pub matches: Vec<BracketMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketState {
    pub format: BracketFormat,
    pub size: u32,
    pub rounds: Vec<BracketRound>,
    pub status: BracketStatus,
}

impl Default for BracketState {
    /// Empty bracket waiting to be started
    fn default() -> Self {
        Self {
            format: BracketFormat::Doubles,
            size: 16,
            rounds: Vec::new(),
            status: BracketStatus::Setup,
        }
    }
}

fn match_id(round_index: usize, match_index: usize) -> String {
    format!("r{}-m{}", round_index, match_index)
}

/// Build a bracket of `size` and seed round 0 from `teams`.
///
/// Teams fill slots in order: team `2k` and `2k + 1` meet in match `k`.
/// Missing teams leave their slot empty.
pub fn start_bracket(
    size: u32,
    format: BracketFormat,
    teams: &[BracketTeam],
) -> Result<BracketState, BracketError> {
    if !BRACKET_SIZES.contains(&size) {
        return Err(BracketError::InvalidSize(size));
    }
    if teams.len() > size as usize {
        warn!(size, teams = teams.len(), "more teams than bracket slots, extra teams dropped");
    }
    if teams.iter().any(|t| t.len() != format.team_size()) {
        warn!(?format, "team size does not match bracket format");
    }

    let total_rounds = size.trailing_zeros() as usize;
    let mut rounds = Vec::with_capacity(total_rounds);

    for r in 0..total_rounds {
        let round_of = size >> r;
        let seed = |slot: usize| -> BracketTeam {
            if r == 0 {
                teams.get(slot).cloned().unwrap_or_default()
            } else {
                Vec::new()
            }
        };

        let matches = (0..(round_of / 2) as usize)
            .map(|m| BracketMatch {
                id: match_id(r, m),
                round_of,
                match_number: m,
                team1: seed(2 * m),
                team2: seed(2 * m + 1),
                score: None,
                winner: None,
                next_match_id: (r + 1 < total_rounds).then(|| match_id(r + 1, m / 2)),
            })
            .collect();

        rounds.push(BracketRound { round_of, matches });
    }

    debug!(size, ?format, rounds = total_rounds, "bracket started");

    Ok(BracketState {
        format,
        size,
        rounds,
        status: BracketStatus::InProgress,
    })
}

impl BracketState {
    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.rounds.last().and_then(|r| r.matches.first())
    }

    /// The champion, once the final has a winner
    pub fn final_winner(&self) -> Option<&BracketTeam> {
        self.final_match().and_then(BracketMatch::winning_team)
    }

    pub fn find_match(&self, round_index: usize, match_id: &str) -> Option<&BracketMatch> {
        self.rounds
            .get(round_index)?
            .matches
            .iter()
            .find(|m| m.id == match_id)
    }

    /// Record a result and advance the winner.
    ///
    /// Equal scores clear the winner and advance nobody. A winner replaces
    /// whatever sat in its slot of the next match. Unknown rounds or match
    /// ids return the state unchanged.
    pub fn report_score(&self, round_index: usize, match_id: &str, score1: u32, score2: u32) -> BracketState {
        let mut next = self.clone();

        let Some(position) = next
            .rounds
            .get(round_index)
            .and_then(|round| round.matches.iter().position(|m| m.id == match_id))
        else {
            warn!(round_index, match_id, "score reported for unknown bracket match");
            return next;
        };

        let current = &mut next.rounds[round_index].matches[position];
        current.score = Some(MatchScore::new(score1, score2));
        current.winner = match score1.cmp(&score2) {
            std::cmp::Ordering::Greater => Some(Side::Team1),
            std::cmp::Ordering::Less => Some(Side::Team2),
            std::cmp::Ordering::Equal => None,
        };

        let advance = current.winning_team().cloned().zip(current.next_match_id.clone());
        let slot = current.feeds_into();

        if let Some((team, next_id)) = advance {
            let target = next
                .rounds
                .get_mut(round_index + 1)
                .and_then(|round| round.matches.iter_mut().find(|m| m.id == next_id));
            match (target, slot) {
                (Some(target), Side::Team1) => target.team1 = team,
                (Some(target), Side::Team2) => target.team2 = team,
                (None, _) => warn!(next_id, "next bracket match missing"),
            }
        }

        next.status = if next.final_winner().is_some() {
            BracketStatus::Completed
        } else {
            BracketStatus::InProgress
        };
        next
    }
}

/// Free-function form of [`BracketState::report_score`]
pub fn report_bracket_score(
    state: &BracketState,
    round_index: usize,
    match_id: &str,
    score1: u32,
    score2: u32,
) -> BracketState {
    state.report_score(round_index, match_id, score1, score2)
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
