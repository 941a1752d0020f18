//! Turn and move control
//!
//! A [`GameSession`] owns the board and drives the turn structure:
//! - The opening move of a game is a single stone.
//! - Every later turn is up to two stones; after the first one the mover may
//!   commit early, after the second the turn passes automatically.
//! - Withdraw steps back one history entry and restores the bookkeeping.
//!
//! UI buttons map onto [`Control`] and go through [`GameSession::activate`].

mod controls;
mod session;

pub use controls::{Control, ControlState};
pub use session::{GameSession, MoveOutcome};

use std::fmt;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "in progress",
            Phase::Finished => "finished",
        })
    }
}
