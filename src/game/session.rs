//! Game session: turn bookkeeping on top of the board

use tracing::{debug, info};

use super::{Control, ControlState, Phase};
use crate::board::{Board, Player, Pos, Step};
use crate::error::GameError;
use crate::rules;

/// Result of a successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The stone completed a five; the game is over
    Won(Player),
    /// The turn moved on to `next`
    TurnPassed { next: Player },
    /// First stone of a two-stone turn; the mover may place again or commit
    AwaitingSecond,
}

/// One game from start to finish, owned by the UI
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    turn: Player,
    /// Stones placed so far in the current turn
    pending: u8,
    winner: Option<Player>,
    /// Set until the opening stone is placed
    first_move: bool,
    winning_line: Option<Vec<Pos>>,
}

impl GameSession {
    pub fn new(board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            phase: Phase::NotStarted,
            turn: Player::One,
            pending: 0,
            winner: None,
            first_move: true,
            winning_line: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player to move
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn pending_moves(&self) -> u8 {
        self.pending
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[inline]
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// The five (or longer) that ended the game, if it ended that way
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Exactly one stone placed this turn, outside the opening move
    pub fn can_commit(&self) -> bool {
        self.pending == 1 && !self.first_move
    }

    fn require_in_progress(&self, action: &'static str) -> Result<(), GameError> {
        if self.phase == Phase::InProgress && self.winner.is_none() {
            Ok(())
        } else {
            Err(GameError::InvalidStateTransition { action, phase: self.phase })
        }
    }

    /// Begin a new game on a cleared board
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase == Phase::InProgress {
            return Err(GameError::InvalidStateTransition {
                action: "start",
                phase: self.phase,
            });
        }
        self.board.reset();
        self.phase = Phase::InProgress;
        self.turn = Player::One;
        self.pending = 0;
        self.winner = None;
        self.first_move = true;
        self.winning_line = None;
        info!(size = self.board.size(), "game started");
        Ok(())
    }

    /// Place a stone for the player to move
    pub fn attempt_move(&mut self, x: usize, y: usize) -> Result<MoveOutcome, GameError> {
        self.require_in_progress("place a stone")?;
        let mover = self.turn;
        let pos = self.board.place(x, y, mover)?;
        self.pending += 1;
        debug!(%pos, player = %mover, pending = self.pending, "stone placed");

        if let Some(winner) = rules::check_win(&self.board, pos) {
            self.winner = Some(winner);
            self.phase = Phase::Finished;
            self.winning_line = rules::winning_line(&self.board, pos);
            info!(%winner, moves = self.board.history().len(), "five in a row");
            return Ok(MoveOutcome::Won(winner));
        }

        if self.first_move {
            self.first_move = false;
            return Ok(self.pass_turn());
        }

        match self.pending {
            1 => Ok(MoveOutcome::AwaitingSecond),
            _ => Ok(self.pass_turn()),
        }
    }

    fn pass_turn(&mut self) -> MoveOutcome {
        self.turn = self.turn.opponent();
        self.pending = 0;
        MoveOutcome::TurnPassed { next: self.turn }
    }

    /// End a one-stone turn early
    pub fn commit_turn(&mut self) -> Result<Player, GameError> {
        self.require_in_progress("commit")?;
        if !self.can_commit() {
            return Err(GameError::InvalidStateTransition {
                action: "commit",
                phase: self.phase,
            });
        }
        self.board.record_pass();
        let committed = self.turn;
        self.pass_turn();
        debug!(player = %committed, "turn committed");
        Ok(self.turn)
    }

    /// Take back the latest history entry, restoring the turn state that
    /// held before it was recorded
    pub fn withdraw_last_move(&mut self) -> Result<Step, GameError> {
        self.require_in_progress("withdraw")?;
        let step = self.board.undo_last()?;
        match step {
            // First stone of the current turn: same player goes again
            Step::Place(_) if self.pending == 1 => self.pending = 0,
            Step::Place(mv) => {
                self.turn = mv.player;
                if self.board.history().is_empty() {
                    self.first_move = true;
                    self.pending = 0;
                } else {
                    self.pending = 1;
                }
            }
            Step::Pass => {
                self.turn = self.turn.opponent();
                self.pending = 1;
            }
        }
        debug!(?step, turn = %self.turn, pending = self.pending, "move withdrawn");
        Ok(step)
    }

    /// Concede the game; the opponent of the player to move wins
    pub fn resign(&mut self) -> Result<Player, GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::InvalidStateTransition {
                action: "resign",
                phase: self.phase,
            });
        }
        self.phase = Phase::Finished;
        let winner = *self.winner.get_or_insert(self.turn.opponent());
        info!(loser = %self.turn, %winner, "resigned");
        Ok(winner)
    }

    /// Run the action behind a control
    pub fn activate(&mut self, control: Control) -> Result<(), GameError> {
        let result = match control {
            Control::Start => self.start(),
            Control::Resign => self.resign().map(drop),
            Control::Commit => self.commit_turn().map(drop),
            Control::Withdraw => self.withdraw_last_move().map(drop),
        };
        if let Err(e) = &result {
            debug!(?control, error = %e, "control rejected");
        }
        result
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        control.is_enabled(self)
    }

    /// Availability of every control, in display order
    pub fn controls(&self) -> [ControlState; 4] {
        Control::ALL.map(|control| ControlState {
            control,
            enabled: control.is_enabled(self),
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(crate::board::DEFAULT_BOARD_SIZE)
    }
}
