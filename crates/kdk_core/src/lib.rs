//! KDK doubles scheduling for small racket-sport tournaments
//!
//! This crate provides:
//! - Partner-rotation ("KDK") doubles schedules: fixed patterns for 8, 12
//!   and 16 players, play-count driven rotation for every other size, and
//!   mixed-doubles / strict-gender variants
//! - Rating-balanced team splitting for groups of four
//! - Standings derived from completed matches
//! - Single-elimination brackets with winner propagation
//!
//! Everything here is a pure function over plain data: no I/O, and every
//! state change returns a new value.
//!
//! # Usage
//!
//! ```
//! use kdk_core::{compute_standings, generate_matches, Gender, Player, TournamentConfig};
//!
//! let roster: Vec<Player> = (0..8)
//!     .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), Gender::Male))
//!     .collect();
//! let matches = generate_matches(&roster, &TournamentConfig::default());
//! assert_eq!(matches.len(), 8);
//!
//! let standings = compute_standings(&roster, &matches);
//! assert_eq!(standings.len(), 8);
//! ```

mod balance;
mod bracket;
mod modes;
mod patterns;
mod rotation;
mod schedule;
mod standings;
mod types;

pub use balance::*;
pub use bracket::*;
pub use modes::*;
pub use patterns::*;
pub use rotation::*;
pub use schedule::*;
pub use standings::*;
pub use types::*;
