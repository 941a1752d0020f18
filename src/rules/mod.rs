//! Game rules for Gomoku
//!
//! Only the win condition lives here: five or more in a row along any axis.
//! Turn structure is handled by [`crate::game`].

pub mod win;

// Re-exports for convenient access
pub use win::{axis_counts, check_win, winning_line, SEARCH_RADIUS, WIN_LENGTH};
