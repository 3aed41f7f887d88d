//! Tournament runner for KDK doubles nights
//!
//! This crate provides the collaborator around `kdk_core`:
//! - A tournament session (roster, schedule, scores) with immutable updates
//! - JSON snapshot storage for the session and the bracket
//! - `tournament.toml` settings
//! - Text reports for the command line
//!
//! # Usage
//!
//! ```bash
//! # Build a roster and a schedule
//! cargo run -p tournament -- player add "Kim" --female --rating 3.5
//! cargo run -p tournament -- config --courts 2 --rounds 5
//! cargo run -p tournament -- generate
//!
//! # Enter a result and look at the table
//! cargo run -p tournament -- score match-8-0 6 4
//! cargo run -p tournament -- standings
//! ```

mod report;
mod session;
mod settings;
mod store;

pub use report::*;
pub use session::*;
pub use settings::*;
pub use store::*;
