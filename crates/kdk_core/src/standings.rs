//! Per-player statistics and ranking derived from completed matches.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::{Match, Player, PlayerId, Side};

/// Outcome of a completed match from one player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    fn from_scores(own: u32, opponent: u32) -> Self {
        match own.cmp(&opponent) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Derived statistics for one player. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points_for: u64,
    pub points_against: u64,
    pub point_diff: i64,
    /// wins / matches played, 0 when nothing has been played
    pub win_rate: f64,
}

impl PlayerStats {
    fn empty(player_id: PlayerId) -> Self {
        Self {
            player_id,
            matches_played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            points_for: 0,
            points_against: 0,
            point_diff: 0,
            win_rate: 0.0,
        }
    }

    fn add(&mut self, own: u32, opponent: u32) {
        self.matches_played += 1;
        self.points_for += u64::from(own);
        self.points_against += u64::from(opponent);
        match Outcome::from_scores(own, opponent) {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    fn finish(mut self) -> Self {
        self.point_diff = self.points_for as i64 - self.points_against as i64;
        self.win_rate = if self.matches_played > 0 {
            self.wins as f64 / self.matches_played as f64
        } else {
            0.0
        };
        self
    }
}

/// Statistics for a single player
pub fn player_stats(player_id: &str, matches: &[Match]) -> PlayerStats {
    let mut stats = PlayerStats::empty(player_id.to_string());
    for m in matches {
        let (Some(score), Some(side)) = (m.score, m.side_of(player_id)) else {
            continue;
        };
        match side {
            Side::Team1 => stats.add(score.team1, score.team2),
            Side::Team2 => stats.add(score.team2, score.team1),
        }
    }
    stats.finish()
}

/// Ranking order: wins, then point differential, then points for, all
/// descending.
pub fn compare_standing(a: &PlayerStats, b: &PlayerStats) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.point_diff.cmp(&a.point_diff))
        .then_with(|| b.points_for.cmp(&a.points_for))
}

/// Ranked statistics for every roster player.
///
/// Exact ties keep roster order (`sort_by` is stable).
pub fn compute_standings(roster: &[Player], matches: &[Match]) -> Vec<PlayerStats> {
    let mut standings: Vec<PlayerStats> = roster
        .iter()
        .map(|p| player_stats(&p.id, matches))
        .collect();
    standings.sort_by(compare_standing);
    standings
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
