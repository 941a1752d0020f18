//! Two-stone Gomoku
//!
//! A hotseat Gomoku variant for two players on a small board (9x9 by
//! default):
//! - Five or more in a row wins (overlines allowed)
//! - The opening move is a single stone
//! - Every later turn is up to two stones; a player may commit after one
//! - Moves and commits can be withdrawn one step at a time
//!
//! # Architecture
//!
//! - [`board`]: Grid of cells plus the move history with undo
//! - [`rules`]: Win detection around the last placed stone
//! - [`game`]: Turn state machine and the control table
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameSession, MoveOutcome, Player};
//!
//! let mut session = GameSession::new(9);
//! session.start().unwrap();
//!
//! // Opening stone passes the turn straight away
//! assert_eq!(
//!     session.attempt_move(4, 4).unwrap(),
//!     MoveOutcome::TurnPassed { next: Player::Two }
//! );
//!
//! // White places one stone and commits
//! session.attempt_move(3, 3).unwrap();
//! session.commit_turn().unwrap();
//! assert_eq!(session.turn(), Player::One);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, Step, DEFAULT_BOARD_SIZE};
pub use config::AppConfig;
pub use error::{ConfigError, GameError};
pub use game::{Control, GameSession, MoveOutcome, Phase};
