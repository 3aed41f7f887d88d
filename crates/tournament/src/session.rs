//! Tournament session: the roster, schedule and configuration that get
//! persisted together.
//!
//! Every operation takes `&self` and returns a fresh session, so a caller
//! holding the previous value never sees it change underneath them.

use kdk_core::{
    compute_standings, generate_matches_with, Gender, Match, MatchScore, Player, PlayerStats,
    TournamentConfig,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("player name must not be empty")]
    EmptyName,
    #[error("a player named '{0}' already exists")]
    DuplicateName(String),
    #[error("rating {0} must be a positive number")]
    InvalidRating(f64),
    #[error("no player with id '{0}'")]
    UnknownPlayer(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentSession {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub config: TournamentConfig,
}

impl TournamentSession {
    pub fn new(config: TournamentConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.active).count()
    }

    /// Add a player with a fresh id
    pub fn add_player(
        &self,
        name: &str,
        gender: Gender,
        rating: Option<f64>,
    ) -> Result<Self, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        let folded = name.to_lowercase();
        if self.players.iter().any(|p| p.name.to_lowercase() == folded) {
            return Err(SessionError::DuplicateName(name.to_string()));
        }
        if let Some(r) = rating {
            if !r.is_finite() || r <= 0.0 {
                return Err(SessionError::InvalidRating(r));
            }
        }

        let mut player = Player::new(Uuid::new_v4().to_string(), name, gender);
        player.rating = rating;
        debug!(id = %player.id, name, "player added");

        let mut next = self.clone();
        next.players.push(player);
        Ok(next)
    }

    /// Remove a player. Existing matches keep referring to them.
    pub fn remove_player(&self, id: &str) -> Result<Self, SessionError> {
        self.require_player(id)?;
        let mut next = self.clone();
        next.players.retain(|p| p.id != id);
        Ok(next)
    }

    pub fn toggle_active(&self, id: &str) -> Result<Self, SessionError> {
        self.require_player(id)?;
        let mut next = self.clone();
        for p in next.players.iter_mut().filter(|p| p.id == id) {
            p.active = !p.active;
        }
        Ok(next)
    }

    /// Replace the configuration. Locked once a schedule exists.
    pub fn set_config(&self, config: TournamentConfig) -> Self {
        if !self.matches.is_empty() {
            warn!("configuration is locked while matches exist");
            return self.clone();
        }
        Self {
            config: config.normalized(),
            ..self.clone()
        }
    }

    /// Replace the schedule with a freshly generated one
    pub fn generate<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let matches = generate_matches_with(&self.players, &self.config, rng);
        info!(
            players = self.active_count(),
            matches = matches.len(),
            "schedule generated"
        );
        Self {
            matches,
            ..self.clone()
        }
    }

    /// Set both scores of a match. Unknown ids leave the session unchanged.
    pub fn record_score(&self, match_id: &str, score1: u32, score2: u32) -> Self {
        self.with_score(match_id, Some(MatchScore::new(score1, score2)))
    }

    /// Mark a match as unplayed again
    pub fn clear_score(&self, match_id: &str) -> Self {
        self.with_score(match_id, None)
    }

    fn with_score(&self, match_id: &str, score: Option<MatchScore>) -> Self {
        let mut next = self.clone();
        match next.matches.iter_mut().find(|m| m.id == match_id) {
            Some(m) => m.score = score,
            None => warn!(match_id, "score for unknown match ignored"),
        }
        next
    }

    /// Drop the schedule, keeping roster and configuration
    pub fn reset_matches(&self) -> Self {
        Self {
            matches: Vec::new(),
            ..self.clone()
        }
    }

    /// Start over with nothing
    pub fn clear_all(&self) -> Self {
        Self::default()
    }

    pub fn standings(&self) -> Vec<PlayerStats> {
        compute_standings(&self.players, &self.matches)
    }

    fn require_player(&self, id: &str) -> Result<(), SessionError> {
        match self.player(id) {
            Some(_) => Ok(()),
            None => Err(SessionError::UnknownPlayer(id.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
